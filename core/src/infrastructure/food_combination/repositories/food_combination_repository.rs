use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_combination::{entities::FoodCombination, ports::FoodCombinationRepository},
};
use crate::entity::food_combinations::{
    ActiveModel as FoodCombinationActiveModel, Column as FoodCombinationColumn,
    Entity as FoodCombinationEntity,
};
use crate::infrastructure::db::errors::map_db_err;

#[derive(Debug, Clone)]
pub struct PostgresFoodCombinationRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodCombinationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodCombinationRepository for PostgresFoodCombinationRepository {
    async fn find_by_meal_plan(&self, meal_plan_id: i32) -> Result<Vec<FoodCombination>, CoreError> {
        let combinations = FoodCombinationEntity::find()
            .filter(FoodCombinationColumn::MealPlanId.eq(meal_plan_id))
            .order_by_asc(FoodCombinationColumn::Start)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("fetch food combinations by meal plan", e))?
            .into_iter()
            .map(FoodCombination::from)
            .collect();

        Ok(combinations)
    }

    async fn find_by_id(&self, id: String) -> Result<Option<FoodCombination>, CoreError> {
        let combination = FoodCombinationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get food combination by id", e))?
            .map(FoodCombination::from);

        Ok(combination)
    }

    async fn create(&self, food_combination: FoodCombination) -> Result<FoodCombination, CoreError> {
        let created = FoodCombinationActiveModel::from(food_combination)
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err("create food combination", e))?;

        Ok(FoodCombination::from(created))
    }

    async fn update(&self, food_combination: FoodCombination) -> Result<FoodCombination, CoreError> {
        let updated = FoodCombinationActiveModel::from(food_combination)
            .update(&self.db)
            .await
            .map_err(|e| map_db_err("update food combination", e))?;

        Ok(FoodCombination::from(updated))
    }

    async fn delete(&self, id: String) -> Result<bool, CoreError> {
        let result = FoodCombinationEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete food combination", e))?;

        Ok(result.rows_affected > 0)
    }
}
