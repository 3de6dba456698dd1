use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
    food_option::{
        entities::FoodOption,
        value_objects::{CreateFoodOptionInput, UpdateFoodOptionInput},
    },
};

pub trait FoodOptionService: Send + Sync {
    fn get_food_options(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<FoodOption>, CoreError>> + Send;

    fn get_food_option(&self, id: i32) -> impl Future<Output = Result<FoodOption, CoreError>> + Send;

    fn create_food_option(
        &self,
        input: CreateFoodOptionInput,
    ) -> impl Future<Output = Result<FoodOption, CoreError>> + Send;

    fn update_food_option(
        &self,
        id: i32,
        input: UpdateFoodOptionInput,
    ) -> impl Future<Output = Result<FoodOption, CoreError>> + Send;

    fn delete_food_option(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<FoodOption, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodOptionRepository: Send + Sync {
    fn find_all(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<FoodOption>, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<FoodOption>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateFoodOptionInput,
    ) -> impl Future<Output = Result<FoodOption, CoreError>> + Send;

    fn update(
        &self,
        food_option: FoodOption,
    ) -> impl Future<Output = Result<FoodOption, CoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
