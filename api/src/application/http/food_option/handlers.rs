pub mod create_food_option;
pub mod delete_food_option;
pub mod get_food_option;
pub mod get_food_options;
pub mod update_food_option;
