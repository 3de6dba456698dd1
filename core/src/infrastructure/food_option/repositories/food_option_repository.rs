use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
    food_option::{
        entities::FoodOption, ports::FoodOptionRepository, value_objects::CreateFoodOptionInput,
    },
};
use crate::entity::food_options::{
    ActiveModel as FoodOptionActiveModel, Column as FoodOptionColumn, Entity as FoodOptionEntity,
};
use crate::infrastructure::db::{errors::map_db_err, query::apply_list_query};

#[derive(Debug, Clone)]
pub struct PostgresFoodOptionRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodOptionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodOptionRepository for PostgresFoodOptionRepository {
    async fn find_all(&self, query: ListQuery) -> Result<Vec<FoodOption>, CoreError> {
        let options = apply_list_query(FoodOptionEntity::find(), &query, FoodOptionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("fetch food options", e))?
            .into_iter()
            .map(FoodOption::from)
            .collect();

        Ok(options)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FoodOption>, CoreError> {
        let option = FoodOptionEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get food option by id", e))?
            .map(FoodOption::from);

        Ok(option)
    }

    async fn create(&self, input: CreateFoodOptionInput) -> Result<FoodOption, CoreError> {
        let created = FoodOptionActiveModel {
            id: NotSet,
            value: Set(input.value),
            text: Set(input.text),
            label: Set(input.label),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err("create food option", e))?;

        Ok(FoodOption::from(created))
    }

    async fn update(&self, food_option: FoodOption) -> Result<FoodOption, CoreError> {
        let updated = FoodOptionActiveModel {
            id: Set(food_option.id),
            value: Set(food_option.value),
            text: Set(food_option.text),
            label: Set(food_option.label),
        }
        .update(&self.db)
        .await
        .map_err(|e| map_db_err("update food option", e))?;

        Ok(FoodOption::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, CoreError> {
        let result = FoodOptionEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete food option", e))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::testing::sqlite_memory;

    fn input(value: &str, text: &str, label: &str) -> CreateFoodOptionInput {
        CreateFoodOptionInput {
            value: value.to_string(),
            text: text.to_string(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn each_column_is_unique_on_its_own() {
        let repository = PostgresFoodOptionRepository::new(sqlite_memory().await);
        repository
            .create(input("apple", "Apple", "Fruit: apple"))
            .await
            .unwrap();

        let err = repository
            .create(input("pear", "Pear", "Fruit: apple"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateKey(_)));
        assert_eq!(
            repository.find_all(ListQuery::default()).await.unwrap().len(),
            1
        );
    }
}
