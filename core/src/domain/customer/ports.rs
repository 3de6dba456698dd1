use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
    customer::{
        entities::Customer,
        value_objects::{CreateCustomerInput, UpdateCustomerInput},
    },
};

pub trait CustomerService: Send + Sync {
    fn get_customers(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Customer>, CoreError>> + Send;

    fn get_customer(&self, id: i32) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn update_customer(
        &self,
        id: i32,
        input: UpdateCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn delete_customer(&self, id: i32) -> impl Future<Output = Result<Customer, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CustomerRepository: Send + Sync {
    fn find_all(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Customer>, CoreError>> + Send;

    fn find_by_id(&self, id: i32)
    -> impl Future<Output = Result<Option<Customer>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn update(&self, customer: Customer)
    -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
