use tracing::info;

use crate::domain::{
    calendar::ports::CalendarRepository,
    calendar_event::ports::CalendarEventRepository,
    client::ports::ClientRepository,
    common::{
        entities::app_errors::CoreError,
        services::Service,
        upsert::{RepositoryStore, UpsertStore, Upserted, upsert},
    },
    customer::ports::CustomerRepository,
    food_combination::{
        entities::FoodCombination,
        ports::{FoodCombinationRepository, FoodCombinationService},
        value_objects::FoodCombinationPatch,
    },
    food_option::ports::FoodOptionRepository,
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

impl<R: FoodCombinationRepository> UpsertStore<FoodCombination> for RepositoryStore<'_, R> {
    async fn find_by_key(&self, id: &String) -> Result<Option<FoodCombination>, CoreError> {
        self.0.find_by_id(id.clone()).await
    }

    async fn insert(&self, entity: FoodCombination) -> Result<FoodCombination, CoreError> {
        self.0.create(entity).await
    }

    async fn save(&self, entity: FoodCombination) -> Result<FoodCombination, CoreError> {
        self.0.update(entity).await
    }
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> FoodCombinationService
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
    async fn get_food_combinations(
        &self,
        meal_plan_id: i32,
    ) -> Result<Vec<FoodCombination>, CoreError> {
        self.food_combination_repository
            .find_by_meal_plan(meal_plan_id)
            .await
    }

    async fn upsert_food_combination(
        &self,
        id: String,
        patch: FoodCombinationPatch,
    ) -> Result<Upserted<FoodCombination>, CoreError> {
        let meal_plan_id = patch.meal_plan_id.unwrap_or_default();
        let meal_plan_exists = async {
            match self.meal_plan_repository.find_by_id(meal_plan_id).await? {
                Some(_) => Ok(()),
                None => Err(CoreError::NotFound(format!(
                    "Invalid meal plan for id: {meal_plan_id}!"
                ))),
            }
        };

        upsert(
            &RepositoryStore(self.food_combination_repository.as_ref()),
            id,
            patch,
            meal_plan_exists,
        )
        .await
        .map_err(|e| e.on_duplicate("Food combination already recorded!"))
    }

    async fn delete_food_combination(&self, id: String) -> Result<FoodCombination, CoreError> {
        let not_found = || CoreError::NotFound(format!("Food Combination not found for id: {id}!"));

        let food_combination = self
            .food_combination_repository
            .find_by_id(id.clone())
            .await?
            .ok_or_else(not_found)?;

        if !self.food_combination_repository.delete(id.clone()).await? {
            return Err(not_found());
        }

        info!(food_combination_id = %id, "food combination deleted");
        Ok(food_combination)
    }
}
