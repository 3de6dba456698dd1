pub mod delete_meal_plan;
pub mod get_meal_plan;
pub mod get_meal_plans;
pub mod upsert_meal_plan;
