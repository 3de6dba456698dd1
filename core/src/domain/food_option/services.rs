use tracing::info;

use crate::domain::{
    calendar::ports::CalendarRepository,
    calendar_event::ports::CalendarEventRepository,
    client::ports::ClientRepository,
    common::{entities::app_errors::CoreError, services::Service, value_objects::ListQuery},
    customer::ports::CustomerRepository,
    food_combination::ports::FoodCombinationRepository,
    food_option::{
        entities::FoodOption,
        ports::{FoodOptionRepository, FoodOptionService},
        value_objects::{CreateFoodOptionInput, UpdateFoodOptionInput},
    },
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

const DUPLICATE_OPTION: &str = "Food option already exists!";

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> FoodOptionService
    for Service<CL, MH, FP, FO, CA, CE, MP, FC, CU>
where
    CL: ClientRepository,
    MH: MedicalHistoryRepository,
    FP: FoodPreferenceRepository,
    FO: FoodOptionRepository,
    CA: CalendarRepository,
    CE: CalendarEventRepository,
    MP: MealPlanRepository,
    FC: FoodCombinationRepository,
    CU: CustomerRepository,
{
    async fn get_food_options(&self, query: ListQuery) -> Result<Vec<FoodOption>, CoreError> {
        self.food_option_repository.find_all(query).await
    }

    async fn get_food_option(&self, id: i32) -> Result<FoodOption, CoreError> {
        self.food_option_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Food option not found for id: {id}!")))
    }

    async fn create_food_option(&self, input: CreateFoodOptionInput) -> Result<FoodOption, CoreError> {
        let food_option = self
            .food_option_repository
            .create(input)
            .await
            .map_err(|e| e.on_duplicate(DUPLICATE_OPTION))?;

        info!(food_option_id = food_option.id, "food option created");
        Ok(food_option)
    }

    async fn update_food_option(
        &self,
        id: i32,
        input: UpdateFoodOptionInput,
    ) -> Result<FoodOption, CoreError> {
        let mut food_option = self.get_food_option(id).await?;
        food_option.update(input);

        self.food_option_repository
            .update(food_option)
            .await
            .map_err(|e| e.on_duplicate(DUPLICATE_OPTION))
    }

    async fn delete_food_option(&self, id: i32) -> Result<FoodOption, CoreError> {
        let food_option = self.get_food_option(id).await?;

        if !self.food_option_repository.delete(id).await? {
            return Err(CoreError::NotFound(format!(
                "Food option not found for id: {id}!"
            )));
        }

        Ok(food_option)
    }
}
