use crate::domain::{
    common::{entities::app_errors::CoreError, upsert::Upserted},
    food_preference::{entities::FoodPreference, value_objects::FoodPreferencePatch},
};

pub trait FoodPreferenceService: Send + Sync {
    /// Zero or one rows.
    fn get_food_preferences(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<Vec<FoodPreference>, CoreError>> + Send;

    fn upsert_food_preference(
        &self,
        client_id: i32,
        patch: FoodPreferencePatch,
    ) -> impl Future<Output = Result<Upserted<FoodPreference>, CoreError>> + Send;

    fn delete_food_preference(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<FoodPreference, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodPreferenceRepository: Send + Sync {
    fn find_by_client_id(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<Option<FoodPreference>, CoreError>> + Send;

    fn create(
        &self,
        food_preference: FoodPreference,
    ) -> impl Future<Output = Result<FoodPreference, CoreError>> + Send;

    fn update(
        &self,
        food_preference: FoodPreference,
    ) -> impl Future<Output = Result<FoodPreference, CoreError>> + Send;

    fn delete(&self, client_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
