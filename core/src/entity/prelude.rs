pub use super::calendar_events::Entity as CalendarEvents;
pub use super::calendars::Entity as Calendars;
pub use super::clients::Entity as Clients;
pub use super::customers::Entity as Customers;
pub use super::food_combinations::Entity as FoodCombinations;
pub use super::food_options::Entity as FoodOptions;
pub use super::food_preferences::Entity as FoodPreferences;
pub use super::meal_plans::Entity as MealPlans;
pub use super::medical_history::Entity as MedicalHistory;
