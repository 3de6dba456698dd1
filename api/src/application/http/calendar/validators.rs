use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of both calendar creation and deletion.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CalendarValidator {
    #[validate(required, length(min = 1, message = "user_email is required"))]
    pub user_email: Option<String>,
}

