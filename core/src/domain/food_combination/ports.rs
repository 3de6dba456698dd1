use crate::domain::{
    common::{entities::app_errors::CoreError, upsert::Upserted},
    food_combination::{entities::FoodCombination, value_objects::FoodCombinationPatch},
};

pub trait FoodCombinationService: Send + Sync {
    /// Combinations of a meal plan ordered by `start`.
    fn get_food_combinations(
        &self,
        meal_plan_id: i32,
    ) -> impl Future<Output = Result<Vec<FoodCombination>, CoreError>> + Send;

    fn upsert_food_combination(
        &self,
        id: String,
        patch: FoodCombinationPatch,
    ) -> impl Future<Output = Result<Upserted<FoodCombination>, CoreError>> + Send;

    fn delete_food_combination(
        &self,
        id: String,
    ) -> impl Future<Output = Result<FoodCombination, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodCombinationRepository: Send + Sync {
    fn find_by_meal_plan(
        &self,
        meal_plan_id: i32,
    ) -> impl Future<Output = Result<Vec<FoodCombination>, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<FoodCombination>, CoreError>> + Send;

    fn create(
        &self,
        food_combination: FoodCombination,
    ) -> impl Future<Output = Result<FoodCombination, CoreError>> + Send;

    fn update(
        &self,
        food_combination: FoodCombination,
    ) -> impl Future<Output = Result<FoodCombination, CoreError>> + Send;

    fn delete(&self, id: String) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
