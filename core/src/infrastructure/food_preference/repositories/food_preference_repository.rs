use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_preference::{entities::FoodPreference, ports::FoodPreferenceRepository},
};
use crate::entity::food_preferences::{
    ActiveModel as FoodPreferenceActiveModel, Entity as FoodPreferenceEntity,
};
use crate::infrastructure::db::errors::map_db_err;

#[derive(Debug, Clone)]
pub struct PostgresFoodPreferenceRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodPreferenceRepository for PostgresFoodPreferenceRepository {
    async fn find_by_client_id(&self, client_id: i32) -> Result<Option<FoodPreference>, CoreError> {
        let preference = FoodPreferenceEntity::find_by_id(client_id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get food preferences by client", e))?
            .map(FoodPreference::from);

        Ok(preference)
    }

    async fn create(&self, food_preference: FoodPreference) -> Result<FoodPreference, CoreError> {
        let created = FoodPreferenceActiveModel::from(food_preference)
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err("create food preferences", e))?;

        Ok(FoodPreference::from(created))
    }

    async fn update(&self, food_preference: FoodPreference) -> Result<FoodPreference, CoreError> {
        let updated = FoodPreferenceActiveModel::from(food_preference)
            .update(&self.db)
            .await
            .map_err(|e| map_db_err("update food preferences", e))?;

        Ok(FoodPreference::from(updated))
    }

    async fn delete(&self, client_id: i32) -> Result<bool, CoreError> {
        let result = FoodPreferenceEntity::delete_by_id(client_id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete food preferences", e))?;

        Ok(result.rows_affected > 0)
    }
}
