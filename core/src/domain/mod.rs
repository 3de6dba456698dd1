pub mod calendar;
pub mod calendar_event;
pub mod client;
pub mod common;
pub mod customer;
pub mod food_combination;
pub mod food_option;
pub mod food_preference;
pub mod meal_plan;
pub mod medical_history;
