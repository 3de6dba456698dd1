use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::{
    client::{entities::Client, ports::ClientRepository, value_objects::CreateClientInput},
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
};
use crate::entity::clients::{
    ActiveModel as ClientActiveModel, Column as ClientColumn, Entity as ClientEntity,
};
use crate::infrastructure::db::{errors::map_db_err, query::apply_list_query};

#[derive(Debug, Clone)]
pub struct PostgresClientRepository {
    pub db: DatabaseConnection,
}

impl PostgresClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ClientRepository for PostgresClientRepository {
    async fn find_all(&self, query: ListQuery) -> Result<Vec<Client>, CoreError> {
        let clients = apply_list_query(ClientEntity::find(), &query, ClientColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("fetch clients", e))?
            .into_iter()
            .map(Client::from)
            .collect();

        Ok(clients)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, CoreError> {
        let client = ClientEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get client by id", e))?
            .map(Client::from);

        Ok(client)
    }

    async fn find_by_email(&self, email: String) -> Result<Option<Client>, CoreError> {
        let client = ClientEntity::find()
            .filter(ClientColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get client by email", e))?
            .map(Client::from);

        Ok(client)
    }

    async fn create(&self, input: CreateClientInput) -> Result<Client, CoreError> {
        let created = ClientActiveModel {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            dob: Set(Some(input.dob.fixed_offset())),
            gender: Set(Some(input.gender)),
            email: Set(input.email),
            phone: Set(Some(input.phone)),
            address: Set(Some(input.address)),
            food_allergies: Set(Some(input.food_allergies)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err("create client", e))?;

        Ok(Client::from(created))
    }

    async fn update(&self, client: Client) -> Result<Client, CoreError> {
        let updated = ClientActiveModel {
            id: Set(client.id),
            first_name: Set(client.first_name),
            last_name: Set(client.last_name),
            dob: Set(client.dob.map(|dt| dt.fixed_offset())),
            gender: Set(client.gender),
            email: Set(client.email),
            phone: Set(client.phone),
            address: Set(client.address),
            food_allergies: Set(client.food_allergies),
        }
        .update(&self.db)
        .await
        .map_err(|e| map_db_err("update client", e))?;

        Ok(Client::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, CoreError> {
        let result = ClientEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete client", e))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::common::value_objects::SortField;
    use crate::infrastructure::db::testing::sqlite_memory;

    fn input(last_name: &str, email: &str) -> CreateClientInput {
        CreateClientInput {
            first_name: "Ada".to_string(),
            last_name: last_name.to_string(),
            dob: Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap(),
            gender: "female".to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
            address: "1 Analytical Way".to_string(),
            food_allergies: "none".to_string(),
        }
    }

    #[tokio::test]
    async fn created_client_is_found_by_id_and_email() {
        let repository = PostgresClientRepository::new(sqlite_memory().await);

        let created = repository
            .create(input("Lovelace", "ada@example.com"))
            .await
            .unwrap();

        let by_id = repository.find_by_id(created.id).await.unwrap();
        assert_eq!(by_id.as_ref(), Some(&created));
        assert_eq!(
            created.dob,
            Some(Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap())
        );

        let by_email = repository
            .find_by_email("ada@example.com".to_string())
            .await
            .unwrap();
        assert_eq!(by_email, Some(created));
    }

    #[tokio::test]
    async fn duplicate_email_is_reported_as_duplicate_key() {
        let repository = PostgresClientRepository::new(sqlite_memory().await);

        repository
            .create(input("Lovelace", "ada@example.com"))
            .await
            .unwrap();
        let err = repository
            .create(input("Byron", "ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateKey(_)));
        assert_eq!(
            repository.find_all(ListQuery::default()).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn find_all_orders_by_requested_column() {
        let repository = PostgresClientRepository::new(sqlite_memory().await);
        repository.create(input("Turing", "alan@example.com")).await.unwrap();
        repository.create(input("Babbage", "charles@example.com")).await.unwrap();

        let clients = repository
            .find_all(ListQuery::ordered_by(SortField::asc("last_name")))
            .await
            .unwrap();
        let names: Vec<_> = clients.iter().map(|c| c.last_name.as_str()).collect();
        assert_eq!(names, ["Babbage", "Turing"]);

        let unknown = repository
            .find_all(ListQuery::ordered_by(SortField::desc("shoe_size")))
            .await
            .unwrap();
        assert_eq!(unknown.len(), 2);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let repository = PostgresClientRepository::new(sqlite_memory().await);
        let created = repository
            .create(input("Lovelace", "ada@example.com"))
            .await
            .unwrap();

        assert!(repository.delete(created.id).await.unwrap());
        assert!(!repository.delete(created.id).await.unwrap());
        assert_eq!(repository.find_by_id(created.id).await.unwrap(), None);
    }
}
