use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodOptionValidator {
    #[validate(required, length(min = 1, message = "value is required"))]
    pub value: Option<String>,

    #[validate(required, length(min = 1, message = "text is required"))]
    pub text: Option<String>,

    #[validate(required, length(min = 1, message = "label is required"))]
    pub label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodOptionValidator {
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub label: Option<String>,
}
