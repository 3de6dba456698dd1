pub mod calendar;
pub mod calendar_event;
pub mod client;
pub mod customer;
pub mod datetime;
pub mod food_combination;
pub mod food_option;
pub mod food_preference;
pub mod meal_plan;
pub mod medical_history;
pub mod path_params;
pub mod query_extractor;
pub mod query_params;
pub mod server;
