use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::{
    common::entities::app_errors::CoreError,
    medical_history::{entities::MedicalHistory, ports::MedicalHistoryRepository},
};
use crate::entity::medical_history::{
    ActiveModel as MedicalHistoryActiveModel, Column as MedicalHistoryColumn,
    Entity as MedicalHistoryEntity,
};
use crate::infrastructure::db::errors::map_db_err;

#[derive(Debug, Clone)]
pub struct PostgresMedicalHistoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresMedicalHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MedicalHistoryRepository for PostgresMedicalHistoryRepository {
    async fn find_by_client(&self, client_id: i32) -> Result<Vec<MedicalHistory>, CoreError> {
        let histories = MedicalHistoryEntity::find()
            .filter(MedicalHistoryColumn::ClientId.eq(client_id))
            .order_by_desc(MedicalHistoryColumn::Date)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("fetch medical histories by client", e))?
            .into_iter()
            .map(MedicalHistory::from)
            .collect();

        Ok(histories)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MedicalHistory>, CoreError> {
        let history = MedicalHistoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get medical history by id", e))?
            .map(MedicalHistory::from);

        Ok(history)
    }

    async fn create(&self, medical_history: MedicalHistory) -> Result<MedicalHistory, CoreError> {
        let created = MedicalHistoryActiveModel::from(medical_history)
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err("create medical history", e))?;

        Ok(MedicalHistory::from(created))
    }

    async fn update(&self, medical_history: MedicalHistory) -> Result<MedicalHistory, CoreError> {
        let updated = MedicalHistoryActiveModel::from(medical_history)
            .update(&self.db)
            .await
            .map_err(|e| map_db_err("update medical history", e))?;

        Ok(MedicalHistory::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, CoreError> {
        let result = MedicalHistoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete medical history", e))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::infrastructure::db::testing::sqlite_memory;

    fn history(id: i32, client_id: i32, day: u32) -> MedicalHistory {
        MedicalHistory {
            id,
            client_id,
            date: Some(Utc.with_ymd_and_hms(2024, 2, day, 10, 0, 0).unwrap()),
            height: Some("170".to_string()),
            weight: Some("70".to_string()),
        }
    }

    #[tokio::test]
    async fn histories_of_a_client_are_newest_first() {
        let repository = PostgresMedicalHistoryRepository::new(sqlite_memory().await);
        repository.create(history(1, 5, 1)).await.unwrap();
        repository.create(history(2, 5, 20)).await.unwrap();
        repository.create(history(3, 6, 10)).await.unwrap();

        let ids: Vec<i32> = repository
            .find_by_client(5)
            .await
            .unwrap()
            .iter()
            .map(|h| h.id)
            .collect();

        assert_eq!(ids, [2, 1]);
        assert!(repository.find_by_client(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn caller_supplied_id_is_kept_and_collisions_are_duplicates() {
        let repository = PostgresMedicalHistoryRepository::new(sqlite_memory().await);

        let created = repository.create(history(42, 5, 1)).await.unwrap();
        assert_eq!(created.id, 42);

        let err = repository.create(history(42, 7, 2)).await.unwrap_err();
        assert!(matches!(err, CoreError::DuplicateKey(_)));
    }
}
