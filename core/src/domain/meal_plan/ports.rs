use crate::domain::{
    common::{entities::app_errors::CoreError, upsert::Upserted, value_objects::ListQuery},
    meal_plan::{entities::MealPlan, value_objects::MealPlanPatch},
};

pub trait MealPlanService: Send + Sync {
    fn get_meal_plans(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn get_meal_plan(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn upsert_meal_plan(
        &self,
        client_id: i32,
        patch: MealPlanPatch,
    ) -> impl Future<Output = Result<Upserted<MealPlan>, CoreError>> + Send;

    fn delete_meal_plan(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    fn find_all(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn find_by_id(&self, id: i32)
    -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    fn find_by_client_id(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    /// Inserts with a store-assigned `id`.
    fn create(&self, meal_plan: MealPlan)
    -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn update(&self, meal_plan: MealPlan)
    -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn delete(&self, client_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
