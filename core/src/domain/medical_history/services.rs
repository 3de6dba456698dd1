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
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::ports::MealPlanRepository,
    medical_history::{
        entities::MedicalHistory,
        ports::{MedicalHistoryRepository, MedicalHistoryService},
        value_objects::MedicalHistoryPatch,
    },
};

impl<R: MedicalHistoryRepository> UpsertStore<MedicalHistory> for RepositoryStore<'_, R> {
    async fn find_by_key(&self, id: &i32) -> Result<Option<MedicalHistory>, CoreError> {
        self.0.find_by_id(*id).await
    }

    async fn insert(&self, entity: MedicalHistory) -> Result<MedicalHistory, CoreError> {
        self.0.create(entity).await
    }

    async fn save(&self, entity: MedicalHistory) -> Result<MedicalHistory, CoreError> {
        self.0.update(entity).await
    }
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> MedicalHistoryService
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
    async fn get_medical_histories(&self, client_id: i32) -> Result<Vec<MedicalHistory>, CoreError> {
        self.medical_history_repository.find_by_client(client_id).await
    }

    async fn upsert_medical_history(
        &self,
        id: i32,
        patch: MedicalHistoryPatch,
    ) -> Result<Upserted<MedicalHistory>, CoreError> {
        let client_id = patch.client_id.unwrap_or_default();

        upsert(
            &RepositoryStore(self.medical_history_repository.as_ref()),
            id,
            patch,
            self.ensure_client(client_id),
        )
        .await
        .map_err(|e| e.on_duplicate("Medical event already recorded at that date!"))
    }

    async fn delete_medical_history(&self, id: i32) -> Result<MedicalHistory, CoreError> {
        let not_found = || CoreError::NotFound(format!("Medical History not found for id: {id}!"));

        let medical_history = self
            .medical_history_repository
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        if !self.medical_history_repository.delete(id).await? {
            return Err(not_found());
        }

        info!(medical_history_id = id, "medical history deleted");
        Ok(medical_history)
    }
}
