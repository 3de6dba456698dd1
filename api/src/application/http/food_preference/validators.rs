use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertFoodPreferenceValidator {
    #[serde(default)]
    pub value: Option<String>,
}
