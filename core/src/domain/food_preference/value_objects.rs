#[derive(Debug, Clone, Default)]
pub struct FoodPreferencePatch {
    pub value: Option<String>,
}
