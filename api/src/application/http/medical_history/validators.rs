use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::datetime::deserialize_optional_datetime;

/// Body of the medical history upsert. Every field must be non-empty on creates and updates
/// alike; the upsert rejects the body with `422` before reading the store otherwise.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertMedicalHistoryValidator {
    #[serde(default)]
    pub client_id: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub height: Option<String>,

    #[serde(default)]
    pub weight: Option<String>,
}
