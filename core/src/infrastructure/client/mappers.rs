use chrono::Utc;

use crate::domain::client::entities::Client;
use crate::entity::clients::Model as ClientModel;

impl From<ClientModel> for Client {
    fn from(model: ClientModel) -> Self {
        Client {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            dob: model.dob.map(|dt| dt.with_timezone(&Utc)),
            gender: model.gender,
            email: model.email,
            phone: model.phone,
            address: model.address,
            food_allergies: model.food_allergies,
        }
    }
}
