use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
    customer::{entities::Customer, ports::CustomerRepository, value_objects::CreateCustomerInput},
};
use crate::entity::customers::{
    ActiveModel as CustomerActiveModel, Column as CustomerColumn, Entity as CustomerEntity,
};
use crate::infrastructure::db::{errors::map_db_err, query::apply_list_query};

#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pub db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CustomerRepository for PostgresCustomerRepository {
    async fn find_all(&self, query: ListQuery) -> Result<Vec<Customer>, CoreError> {
        let customers = apply_list_query(CustomerEntity::find(), &query, CustomerColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("fetch customers", e))?
            .into_iter()
            .map(Customer::from)
            .collect();

        Ok(customers)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, CoreError> {
        let customer = CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get customer by id", e))?
            .map(Customer::from);

        Ok(customer)
    }

    async fn create(&self, input: CreateCustomerInput) -> Result<Customer, CoreError> {
        let created = CustomerActiveModel {
            id: NotSet,
            name: Set(input.name),
            surname: Set(input.surname),
            email: Set(input.email),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err("create customer", e))?;

        Ok(Customer::from(created))
    }

    async fn update(&self, customer: Customer) -> Result<Customer, CoreError> {
        let updated = CustomerActiveModel {
            id: Set(customer.id),
            name: Set(customer.name),
            surname: Set(customer.surname),
            email: Set(customer.email),
        }
        .update(&self.db)
        .await
        .map_err(|e| map_db_err("update customer", e))?;

        Ok(Customer::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, CoreError> {
        let result = CustomerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete customer", e))?;

        Ok(result.rows_affected > 0)
    }
}
