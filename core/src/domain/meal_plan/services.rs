use tracing::info;

use crate::domain::{
    calendar::ports::CalendarRepository,
    calendar_event::ports::CalendarEventRepository,
    client::ports::ClientRepository,
    common::{
        entities::app_errors::CoreError,
        services::Service,
        upsert::{RepositoryStore, UpsertStore, Upserted, upsert},
        value_objects::ListQuery,
    },
    customer::ports::CustomerRepository,
    food_combination::ports::FoodCombinationRepository,
    food_option::ports::FoodOptionRepository,
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::{
        entities::MealPlan,
        ports::{MealPlanRepository, MealPlanService},
        value_objects::MealPlanPatch,
    },
    medical_history::ports::MedicalHistoryRepository,
};

fn meal_plan_not_found(client_id: i32) -> CoreError {
    CoreError::NotFound(format!("Meal Plan not found for client id: {client_id}!"))
}

impl<R: MealPlanRepository> UpsertStore<MealPlan> for RepositoryStore<'_, R> {
    async fn find_by_key(&self, client_id: &i32) -> Result<Option<MealPlan>, CoreError> {
        self.0.find_by_client_id(*client_id).await
    }

    async fn insert(&self, entity: MealPlan) -> Result<MealPlan, CoreError> {
        self.0.create(entity).await
    }

    async fn save(&self, entity: MealPlan) -> Result<MealPlan, CoreError> {
        self.0.update(entity).await
    }
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> MealPlanService
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
    async fn get_meal_plans(&self, query: ListQuery) -> Result<Vec<MealPlan>, CoreError> {
        self.meal_plan_repository.find_all(query).await
    }

    async fn get_meal_plan(&self, client_id: i32) -> Result<MealPlan, CoreError> {
        self.meal_plan_repository
            .find_by_client_id(client_id)
            .await?
            .ok_or_else(|| meal_plan_not_found(client_id))
    }

    async fn upsert_meal_plan(
        &self,
        client_id: i32,
        patch: MealPlanPatch,
    ) -> Result<Upserted<MealPlan>, CoreError> {
        upsert(
            &RepositoryStore(self.meal_plan_repository.as_ref()),
            client_id,
            patch,
            self.ensure_client(client_id),
        )
        .await
        .map_err(|e| e.on_duplicate("Meal plan for this client already exists!"))
    }

    async fn delete_meal_plan(&self, client_id: i32) -> Result<MealPlan, CoreError> {
        let meal_plan = self.get_meal_plan(client_id).await?;

        if !self.meal_plan_repository.delete(client_id).await? {
            return Err(meal_plan_not_found(client_id));
        }

        info!(client_id, meal_plan_id = meal_plan.id, "meal plan deleted");
        Ok(meal_plan)
    }
}
