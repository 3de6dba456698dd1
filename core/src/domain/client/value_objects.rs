use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct CreateClientInput {
    pub first_name: String,
    pub last_name: String,
    pub dob: DateTime<Utc>,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub food_allergies: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClientInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<DateTime<Utc>>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub food_allergies: Option<String>,
}
