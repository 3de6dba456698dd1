use tracing::info;

use crate::domain::{
    calendar::ports::CalendarRepository,
    calendar_event::ports::CalendarEventRepository,
    client::{
        entities::Client,
        ports::{ClientRepository, ClientService},
        value_objects::{CreateClientInput, UpdateClientInput},
    },
    common::{
        entities::app_errors::CoreError,
        services::Service,
        value_objects::{Counted, ListQuery},
    },
    customer::ports::CustomerRepository,
    food_combination::ports::FoodCombinationRepository,
    food_option::ports::FoodOptionRepository,
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

const DUPLICATE_EMAIL: &str = "Client with this email already exists!";

fn not_found(id: i32) -> CoreError {
    CoreError::NotFound(format!("Client not found for id: {id}!"))
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> ClientService
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
    async fn get_clients(&self, query: ListQuery) -> Result<Vec<Client>, CoreError> {
        self.client_repository.find_all(query).await
    }

    async fn count_clients(&self) -> Result<Counted<Client>, CoreError> {
        let clients = self.client_repository.find_all(ListQuery::default()).await?;
        Ok(Counted::from(clients))
    }

    async fn get_client(&self, id: i32) -> Result<Client, CoreError> {
        self.client_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn get_client_by_email(&self, email: String) -> Result<Client, CoreError> {
        self.client_repository
            .find_by_email(email.clone())
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Client not found for email: {email}!")))
    }

    async fn create_client(&self, input: CreateClientInput) -> Result<Client, CoreError> {
        let client = self
            .client_repository
            .create(input)
            .await
            .map_err(|e| e.on_duplicate(DUPLICATE_EMAIL))?;

        info!(client_id = client.id, "client created");
        Ok(client)
    }

    async fn update_client(&self, id: i32, input: UpdateClientInput) -> Result<Client, CoreError> {
        let mut client = self.get_client(id).await?;
        client.update(input);

        self.client_repository
            .update(client)
            .await
            .map_err(|e| e.on_duplicate(DUPLICATE_EMAIL))
    }

    async fn delete_client(&self, id: i32) -> Result<Client, CoreError> {
        let client = self.get_client(id).await?;

        if !self.client_repository.delete(id).await? {
            return Err(not_found(id));
        }

        info!(client_id = id, "client deleted");
        Ok(client)
    }
}
