use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
    meal_plan::{entities::MealPlan, ports::MealPlanRepository},
};
use crate::entity::meal_plans::{
    ActiveModel as MealPlanActiveModel, Column as MealPlanColumn, Entity as MealPlanEntity,
};
use crate::infrastructure::db::{errors::map_db_err, query::apply_list_query};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn find_all(&self, query: ListQuery) -> Result<Vec<MealPlan>, CoreError> {
        let plans = apply_list_query(MealPlanEntity::find(), &query, MealPlanColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("fetch meal plans", e))?
            .into_iter()
            .map(MealPlan::from)
            .collect();

        Ok(plans)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MealPlan>, CoreError> {
        let plan = MealPlanEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get meal plan by id", e))?
            .map(MealPlan::from);

        Ok(plan)
    }

    async fn find_by_client_id(&self, client_id: i32) -> Result<Option<MealPlan>, CoreError> {
        let plan = MealPlanEntity::find()
            .filter(MealPlanColumn::ClientId.eq(client_id))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get meal plan by client", e))?
            .map(MealPlan::from);

        Ok(plan)
    }

    async fn create(&self, meal_plan: MealPlan) -> Result<MealPlan, CoreError> {
        let created = MealPlanActiveModel {
            id: NotSet,
            ..MealPlanActiveModel::from(meal_plan)
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err("create meal plan", e))?;

        Ok(MealPlan::from(created))
    }

    async fn update(&self, meal_plan: MealPlan) -> Result<MealPlan, CoreError> {
        let updated = MealPlanActiveModel::from(meal_plan)
            .update(&self.db)
            .await
            .map_err(|e| map_db_err("update meal plan", e))?;

        Ok(MealPlan::from(updated))
    }

    async fn delete(&self, client_id: i32) -> Result<bool, CoreError> {
        let result = MealPlanEntity::delete_many()
            .filter(MealPlanColumn::ClientId.eq(client_id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete meal plan", e))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::testing::sqlite_memory;

    fn plan(client_id: i32) -> MealPlan {
        MealPlan {
            id: 0,
            client_id,
            client_first_name: "Grace".to_string(),
            client_last_name: "Hopper".to_string(),
            date: None,
            age: Some(40),
            weight: Some(60.5),
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_is_found_by_client() {
        let repository = PostgresMealPlanRepository::new(sqlite_memory().await);

        let created = repository.create(plan(8)).await.unwrap();
        assert!(created.id > 0);

        let found = repository.find_by_client_id(8).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert_eq!(repository.find_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn one_plan_per_client() {
        let repository = PostgresMealPlanRepository::new(sqlite_memory().await);
        repository.create(plan(8)).await.unwrap();

        let err = repository.create(plan(8)).await.unwrap_err();
        assert!(matches!(err, CoreError::DuplicateKey(_)));
    }
}
