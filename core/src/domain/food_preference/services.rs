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
    food_combination::ports::FoodCombinationRepository,
    food_option::ports::FoodOptionRepository,
    food_preference::{
        entities::FoodPreference,
        ports::{FoodPreferenceRepository, FoodPreferenceService},
        value_objects::FoodPreferencePatch,
    },
    meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

impl<R: FoodPreferenceRepository> UpsertStore<FoodPreference> for RepositoryStore<'_, R> {
    async fn find_by_key(&self, client_id: &i32) -> Result<Option<FoodPreference>, CoreError> {
        self.0.find_by_client_id(*client_id).await
    }

    async fn insert(&self, entity: FoodPreference) -> Result<FoodPreference, CoreError> {
        self.0.create(entity).await
    }

    async fn save(&self, entity: FoodPreference) -> Result<FoodPreference, CoreError> {
        self.0.update(entity).await
    }
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> FoodPreferenceService
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
    async fn get_food_preferences(&self, client_id: i32) -> Result<Vec<FoodPreference>, CoreError> {
        let food_preference = self
            .food_preference_repository
            .find_by_client_id(client_id)
            .await?;

        Ok(food_preference.into_iter().collect())
    }

    async fn upsert_food_preference(
        &self,
        client_id: i32,
        patch: FoodPreferencePatch,
    ) -> Result<Upserted<FoodPreference>, CoreError> {
        upsert(
            &RepositoryStore(self.food_preference_repository.as_ref()),
            client_id,
            patch,
            self.ensure_client(client_id),
        )
        .await
        .map_err(|e| e.on_duplicate("Food preferences for this client already exist!"))
    }

    async fn delete_food_preference(&self, client_id: i32) -> Result<FoodPreference, CoreError> {
        let not_found =
            || CoreError::NotFound(format!("Food Preferences not found for id: {client_id}!"));

        let food_preference = self
            .food_preference_repository
            .find_by_client_id(client_id)
            .await?
            .ok_or_else(not_found)?;

        if !self.food_preference_repository.delete(client_id).await? {
            return Err(not_found());
        }

        info!(client_id, "food preferences deleted");
        Ok(food_preference)
    }
}
