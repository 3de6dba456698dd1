pub mod delete_food_preference;
pub mod get_food_preferences;
pub mod upsert_food_preference;
