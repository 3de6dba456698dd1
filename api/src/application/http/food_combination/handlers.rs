pub mod delete_food_combination;
pub mod get_food_combinations;
pub mod upsert_food_combination;
