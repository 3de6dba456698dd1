use crate::domain::customer::entities::Customer;
use crate::entity::customers::Model as CustomerModel;

impl From<CustomerModel> for Customer {
    fn from(model: CustomerModel) -> Self {
        Customer {
            id: model.id,
            name: model.name,
            surname: model.surname,
            email: model.email,
        }
    }
}
