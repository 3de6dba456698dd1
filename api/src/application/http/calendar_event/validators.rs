use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCalendarEventValidator {
    #[validate(required, length(min = 1, message = "id is required"))]
    pub id: Option<String>,

    #[validate(required, length(min = 1, message = "user_email is required"))]
    pub user_email: Option<String>,

    #[validate(required, length(min = 1, message = "title is required"))]
    pub title: Option<String>,

    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub end: Option<String>,

    #[serde(default, rename = "allDay")]
    pub all_day: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCalendarEventValidator {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub end: Option<String>,

    #[serde(default, rename = "allDay")]
    pub all_day: Option<bool>,
}
