use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::datetime::deserialize_optional_datetime;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertMealPlanValidator {
    #[serde(default)]
    pub client_first_name: Option<String>,

    #[serde(default)]
    pub client_last_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub age: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,
}
