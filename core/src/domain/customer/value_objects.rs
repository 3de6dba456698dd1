#[derive(Debug, Clone)]
pub struct CreateCustomerInput {
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerInput {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}
