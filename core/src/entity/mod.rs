pub mod prelude;

pub mod calendar_events;
pub mod calendars;
pub mod clients;
pub mod customers;
pub mod food_combinations;
pub mod food_options;
pub mod food_preferences;
pub mod meal_plans;
pub mod medical_history;
