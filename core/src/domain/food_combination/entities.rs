use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::upsert::{Upsertable, is_present, merge},
    food_combination::value_objects::FoodCombinationPatch,
};

/// A scheduled portion of food inside a meal plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodCombination {
    pub id: String,
    pub meal_plan_id: i32,
    pub title: String,
    pub portion: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "typeOfMeal")]
    pub type_of_meal: String,
    pub day: String,
}

impl Upsertable for FoodCombination {
    type Key = String;
    type Patch = FoodCombinationPatch;

    const NAME: &'static str = "food_combination";

    fn required(patch: &FoodCombinationPatch) -> Vec<(&'static str, bool)> {
        vec![
            ("meal_plan_id", is_present(&patch.meal_plan_id)),
            ("title", is_present(&patch.title)),
            ("portion", is_present(&patch.portion)),
            ("start", is_present(&patch.start)),
            ("end", is_present(&patch.end)),
            ("typeOfMeal", is_present(&patch.type_of_meal)),
            ("day", is_present(&patch.day)),
        ]
    }

    fn create(id: String, patch: FoodCombinationPatch) -> Self {
        Self {
            id,
            meal_plan_id: patch.meal_plan_id.unwrap_or_default(),
            title: patch.title.unwrap_or_default(),
            portion: patch.portion.unwrap_or_default(),
            start: patch.start.unwrap_or_default(),
            end: patch.end.unwrap_or_default(),
            type_of_meal: patch.type_of_meal.unwrap_or_default(),
            day: patch.day.unwrap_or_default(),
        }
    }

    fn merge(&mut self, patch: FoodCombinationPatch) {
        merge(&mut self.meal_plan_id, patch.meal_plan_id);
        merge(&mut self.title, patch.title);
        merge(&mut self.portion, patch.portion);
        merge(&mut self.start, patch.start);
        merge(&mut self.end, patch.end);
        merge(&mut self.type_of_meal, patch.type_of_meal);
        merge(&mut self.day, patch.day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch() -> FoodCombinationPatch {
        FoodCombinationPatch {
            meal_plan_id: Some(2),
            title: Some("Oats with berries".to_string()),
            portion: Some("1 bowl".to_string()),
            start: Some("08:00".to_string()),
            end: Some("08:30".to_string()),
            type_of_meal: Some("breakfast".to_string()),
            day: Some("monday".to_string()),
        }
    }

    #[test]
    fn day_is_required() {
        let patch = FoodCombinationPatch {
            day: None,
            ..patch()
        };
        assert!(FoodCombination::validate(&patch).is_err());
    }

    #[test]
    fn create_copies_every_field() {
        let combination = FoodCombination::create("fc-1".to_string(), patch());
        assert_eq!(combination.id, "fc-1");
        assert_eq!(combination.meal_plan_id, 2);
        assert_eq!(combination.type_of_meal, "breakfast");
        assert_eq!(combination.day, "monday");
    }
}
