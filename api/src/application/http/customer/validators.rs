use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerValidator {
    #[validate(required, length(min = 1, message = "name is required"))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, message = "surname is required"))]
    pub surname: Option<String>,

    #[validate(required, length(min = 1, message = "email is required"))]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub surname: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}
