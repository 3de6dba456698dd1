use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::upsert::{Upsertable, merge_optional},
    food_preference::value_objects::FoodPreferencePatch,
};

/// Free-form food preferences of a client; at most one row per client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodPreference {
    pub client_id: i32,
    pub value: Option<String>,
}

impl Upsertable for FoodPreference {
    type Key = i32;
    type Patch = FoodPreferencePatch;

    const NAME: &'static str = "food_preference";

    fn required(_: &FoodPreferencePatch) -> Vec<(&'static str, bool)> {
        Vec::new()
    }

    fn create(client_id: i32, patch: FoodPreferencePatch) -> Self {
        Self {
            client_id,
            value: patch.value,
        }
    }

    fn merge(&mut self, patch: FoodPreferencePatch) {
        merge_optional(&mut self.value, patch.value);
    }
}
