use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::meal_plan::entities::MealPlan;
use crate::entity::meal_plans::{ActiveModel as MealPlanActiveModel, Model as MealPlanModel};

impl From<MealPlanModel> for MealPlan {
    fn from(model: MealPlanModel) -> Self {
        MealPlan {
            id: model.id,
            client_id: model.client_id,
            client_first_name: model.client_first_name,
            client_last_name: model.client_last_name,
            date: model.date.map(|dt| dt.with_timezone(&Utc)),
            age: model.age,
            weight: model.weight,
            notes: model.notes,
        }
    }
}

impl From<MealPlan> for MealPlanActiveModel {
    fn from(plan: MealPlan) -> Self {
        MealPlanActiveModel {
            id: Set(plan.id),
            client_id: Set(plan.client_id),
            client_first_name: Set(plan.client_first_name),
            client_last_name: Set(plan.client_last_name),
            date: Set(plan.date.map(|dt| dt.fixed_offset())),
            age: Set(plan.age),
            weight: Set(plan.weight),
            notes: Set(plan.notes),
        }
    }
}
