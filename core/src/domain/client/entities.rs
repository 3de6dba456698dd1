use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    client::value_objects::UpdateClientInput,
    common::upsert::{merge, merge_optional},
};

/// A person under care. Every other clinical record points back to a client by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<DateTime<Utc>>,
    pub gender: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub food_allergies: Option<String>,
}

impl Client {
    /// Applies the non-empty fields of `input`; empty strings keep the stored value.
    pub fn update(&mut self, input: UpdateClientInput) {
        merge(&mut self.first_name, input.first_name);
        merge(&mut self.last_name, input.last_name);
        merge_optional(&mut self.dob, input.dob);
        merge_optional(&mut self.gender, input.gender);
        merge(&mut self.email, input.email);
        merge_optional(&mut self.phone, input.phone);
        merge_optional(&mut self.address, input.address);
        merge_optional(&mut self.food_allergies, input.food_allergies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            dob: None,
            gender: Some("female".to_string()),
            email: "ada@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            address: None,
            food_allergies: Some("peanuts".to_string()),
        }
    }

    #[test]
    fn update_overwrites_present_fields_only() {
        let mut client = client();
        client.update(UpdateClientInput {
            last_name: Some("Byron".to_string()),
            address: Some("12 St James's Square".to_string()),
            ..Default::default()
        });

        assert_eq!(client.first_name, "Ada");
        assert_eq!(client.last_name, "Byron");
        assert_eq!(client.address.as_deref(), Some("12 St James's Square"));
    }

    #[test]
    fn update_ignores_empty_strings() {
        let mut client = client();
        client.update(UpdateClientInput {
            email: Some(String::new()),
            food_allergies: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(client.email, "ada@example.com");
        assert_eq!(client.food_allergies.as_deref(), Some("peanuts"));
    }
}
