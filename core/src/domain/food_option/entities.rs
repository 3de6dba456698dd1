use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::upsert::merge, food_option::value_objects::UpdateFoodOptionInput};

/// Entry of the selectable food lookup list. `value`, `text` and `label` are each unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodOption {
    pub id: i32,
    pub value: String,
    pub text: String,
    pub label: String,
}

impl FoodOption {
    pub fn update(&mut self, input: UpdateFoodOptionInput) {
        merge(&mut self.value, input.value);
        merge(&mut self.text, input.text);
        merge(&mut self.label, input.label);
    }
}
