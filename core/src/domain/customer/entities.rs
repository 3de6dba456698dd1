use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::upsert::merge, customer::value_objects::UpdateCustomerInput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl Customer {
    pub fn update(&mut self, input: UpdateCustomerInput) {
        merge(&mut self.name, input.name);
        merge(&mut self.surname, input.surname);
        merge(&mut self.email, input.email);
    }
}
