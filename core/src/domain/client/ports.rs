use crate::domain::{
    client::{
        entities::Client,
        value_objects::{CreateClientInput, UpdateClientInput},
    },
    common::{
        entities::app_errors::CoreError,
        value_objects::{Counted, ListQuery},
    },
};

pub trait ClientService: Send + Sync {
    fn get_clients(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Client>, CoreError>> + Send;

    fn count_clients(&self) -> impl Future<Output = Result<Counted<Client>, CoreError>> + Send;

    fn get_client(&self, id: i32) -> impl Future<Output = Result<Client, CoreError>> + Send;

    fn get_client_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Client, CoreError>> + Send;

    fn create_client(
        &self,
        input: CreateClientInput,
    ) -> impl Future<Output = Result<Client, CoreError>> + Send;

    fn update_client(
        &self,
        id: i32,
        input: UpdateClientInput,
    ) -> impl Future<Output = Result<Client, CoreError>> + Send;

    fn delete_client(&self, id: i32) -> impl Future<Output = Result<Client, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ClientRepository: Send + Sync {
    fn find_all(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Client>, CoreError>> + Send;

    fn find_by_id(&self, id: i32) -> impl Future<Output = Result<Option<Client>, CoreError>> + Send;

    fn find_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<Client>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateClientInput,
    ) -> impl Future<Output = Result<Client, CoreError>> + Send;

    fn update(&self, client: Client) -> impl Future<Output = Result<Client, CoreError>> + Send;

    /// Returns whether a row was removed.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
