#[derive(Debug, Clone)]
pub struct CreateFoodOptionInput {
    pub value: String,
    pub text: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFoodOptionInput {
    pub value: Option<String>,
    pub text: Option<String>,
    pub label: Option<String>,
}
