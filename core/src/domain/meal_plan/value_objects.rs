use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct MealPlanPatch {
    pub client_first_name: Option<String>,
    pub client_last_name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}
