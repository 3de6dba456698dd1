use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::datetime::deserialize_optional_datetime;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClientValidator {
    #[validate(required, length(min = 1, message = "first_name is required"))]
    pub first_name: Option<String>,

    #[validate(required, length(min = 1, message = "last_name is required"))]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    #[validate(required(message = "dob is required"))]
    pub dob: Option<DateTime<Utc>>,

    #[validate(required, length(min = 1, message = "gender is required"))]
    pub gender: Option<String>,

    #[validate(required, length(min = 1, message = "email is required"))]
    pub email: Option<String>,

    #[validate(required, length(min = 1, message = "phone is required"))]
    pub phone: Option<String>,

    #[validate(required, length(min = 1, message = "address is required"))]
    pub address: Option<String>,

    #[validate(required, length(min = 1, message = "food_allergies is required"))]
    pub food_allergies: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateClientValidator {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub dob: Option<DateTime<Utc>>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub food_allergies: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_every_field() {
        let complete: CreateClientValidator = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "dob": "1990-12-10",
            "gender": "female",
            "email": "ada@example.com",
            "phone": "555-0100",
            "address": "12 St James's Square",
            "food_allergies": "none"
        }))
        .unwrap();
        assert!(complete.validate().is_ok());

        let missing_phone: CreateClientValidator = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "dob": "1990-12-10",
            "gender": "female",
            "email": "ada@example.com",
            "address": "12 St James's Square",
            "food_allergies": "none"
        }))
        .unwrap();
        assert!(missing_phone.validate().is_err());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let body: CreateClientValidator = serde_json::from_value(serde_json::json!({
            "first_name": "",
            "last_name": "Lovelace",
            "dob": "1990-12-10",
            "gender": "female",
            "email": "ada@example.com",
            "phone": "555-0100",
            "address": "12 St James's Square",
            "food_allergies": "none"
        }))
        .unwrap();
        assert!(body.validate().is_err());
    }
}
