use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::upsert::{Upsertable, is_present, merge, merge_optional},
    meal_plan::value_objects::MealPlanPatch,
};

/// The diet plan of a client; at most one per client. Food combinations hang off `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub id: i32,
    pub client_id: i32,
    pub client_first_name: String,
    pub client_last_name: String,
    pub date: Option<DateTime<Utc>>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

impl Upsertable for MealPlan {
    type Key = i32;
    type Patch = MealPlanPatch;

    const NAME: &'static str = "meal_plan";

    fn required(patch: &MealPlanPatch) -> Vec<(&'static str, bool)> {
        vec![
            ("client_first_name", is_present(&patch.client_first_name)),
            ("client_last_name", is_present(&patch.client_last_name)),
            ("date", is_present(&patch.date)),
        ]
    }

    /// `id` stays 0 until the store assigns one.
    fn create(client_id: i32, patch: MealPlanPatch) -> Self {
        Self {
            id: 0,
            client_id,
            client_first_name: patch.client_first_name.unwrap_or_default(),
            client_last_name: patch.client_last_name.unwrap_or_default(),
            date: patch.date,
            age: patch.age,
            weight: patch.weight,
            notes: patch.notes,
        }
    }

    fn merge(&mut self, patch: MealPlanPatch) {
        merge(&mut self.client_first_name, patch.client_first_name);
        merge(&mut self.client_last_name, patch.client_last_name);
        merge_optional(&mut self.date, patch.date);
        merge_optional(&mut self.age, patch.age);
        merge_optional(&mut self.weight, patch.weight);
        merge_optional(&mut self.notes, patch.notes);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn merge_keeps_numbers_on_zero() {
        let mut plan = MealPlan::create(
            3,
            MealPlanPatch {
                client_first_name: Some("Grace".to_string()),
                client_last_name: Some("Hopper".to_string()),
                date: Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()),
                age: Some(41),
                weight: Some(61.5),
                notes: None,
            },
        );

        plan.merge(MealPlanPatch {
            age: Some(0),
            weight: Some(0.0),
            notes: Some("low sodium".to_string()),
            ..Default::default()
        });

        assert_eq!(plan.client_id, 3);
        assert_eq!(plan.age, Some(41));
        assert_eq!(plan.weight, Some(61.5));
        assert_eq!(plan.notes.as_deref(), Some("low sodium"));
    }

    #[test]
    fn names_and_date_are_required() {
        let patch = MealPlanPatch {
            client_first_name: Some("Grace".to_string()),
            client_last_name: Some("Hopper".to_string()),
            ..Default::default()
        };
        assert!(MealPlan::validate(&patch).is_err());
    }
}
