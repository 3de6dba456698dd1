use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    calendar::ports::CalendarRepository, calendar_event::ports::CalendarEventRepository,
    client::ports::ClientRepository, customer::ports::CustomerRepository,
    food_combination::ports::FoodCombinationRepository, food_option::ports::FoodOptionRepository,
    food_preference::ports::FoodPreferenceRepository, meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

/// Holds one repository per resource; every `<Resource>Service` trait is implemented on it.
pub struct Service<CL, MH, FP, FO, CA, CE, MP, FC, CU>
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
    pub(crate) client_repository: Arc<CL>,
    pub(crate) medical_history_repository: Arc<MH>,
    pub(crate) food_preference_repository: Arc<FP>,
    pub(crate) food_option_repository: Arc<FO>,
    pub(crate) calendar_repository: Arc<CA>,
    pub(crate) calendar_event_repository: Arc<CE>,
    pub(crate) meal_plan_repository: Arc<MP>,
    pub(crate) food_combination_repository: Arc<FC>,
    pub(crate) customer_repository: Arc<CU>,
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> Clone for Service<CL, MH, FP, FO, CA, CE, MP, FC, CU>
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
    fn clone(&self) -> Self {
        Self {
            client_repository: Arc::clone(&self.client_repository),
            medical_history_repository: Arc::clone(&self.medical_history_repository),
            food_preference_repository: Arc::clone(&self.food_preference_repository),
            food_option_repository: Arc::clone(&self.food_option_repository),
            calendar_repository: Arc::clone(&self.calendar_repository),
            calendar_event_repository: Arc::clone(&self.calendar_event_repository),
            meal_plan_repository: Arc::clone(&self.meal_plan_repository),
            food_combination_repository: Arc::clone(&self.food_combination_repository),
            customer_repository: Arc::clone(&self.customer_repository),
        }
    }
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> Service<CL, MH, FP, FO, CA, CE, MP, FC, CU>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        client_repository: CL,
        medical_history_repository: MH,
        food_preference_repository: FP,
        food_option_repository: FO,
        calendar_repository: CA,
        calendar_event_repository: CE,
        meal_plan_repository: MP,
        food_combination_repository: FC,
        customer_repository: CU,
    ) -> Self {
        Self {
            client_repository: Arc::new(client_repository),
            medical_history_repository: Arc::new(medical_history_repository),
            food_preference_repository: Arc::new(food_preference_repository),
            food_option_repository: Arc::new(food_option_repository),
            calendar_repository: Arc::new(calendar_repository),
            calendar_event_repository: Arc::new(calendar_event_repository),
            meal_plan_repository: Arc::new(meal_plan_repository),
            food_combination_repository: Arc::new(food_combination_repository),
            customer_repository: Arc::new(customer_repository),
        }
    }

    /// Fails with `NotFound` unless a client with `client_id` exists.
    pub(crate) async fn ensure_client(&self, client_id: i32) -> Result<(), CoreError> {
        match self.client_repository.find_by_id(client_id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound(format!(
                "Invalid client for id: {client_id}!"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        calendar::ports::MockCalendarRepository,
        calendar_event::ports::MockCalendarEventRepository,
        client::{
            ports::{ClientService, MockClientRepository},
            value_objects::CreateClientInput,
        },
        customer::ports::MockCustomerRepository,
        food_combination::ports::MockFoodCombinationRepository,
        food_option::ports::MockFoodOptionRepository,
        food_preference::ports::MockFoodPreferenceRepository,
        meal_plan::ports::MockMealPlanRepository,
        medical_history::{
            ports::{MedicalHistoryService, MockMedicalHistoryRepository},
            value_objects::MedicalHistoryPatch,
        },
    };
    use chrono::{TimeZone, Utc};

    type MockService = Service<
        MockClientRepository,
        MockMedicalHistoryRepository,
        MockFoodPreferenceRepository,
        MockFoodOptionRepository,
        MockCalendarRepository,
        MockCalendarEventRepository,
        MockMealPlanRepository,
        MockFoodCombinationRepository,
        MockCustomerRepository,
    >;

    fn service_with(
        clients: MockClientRepository,
        medical_histories: MockMedicalHistoryRepository,
    ) -> MockService {
        Service::new(
            clients,
            medical_histories,
            MockFoodPreferenceRepository::new(),
            MockFoodOptionRepository::new(),
            MockCalendarRepository::new(),
            MockCalendarEventRepository::new(),
            MockMealPlanRepository::new(),
            MockFoodCombinationRepository::new(),
            MockCustomerRepository::new(),
        )
    }

    #[tokio::test]
    async fn store_failures_reach_the_caller_unchanged() {
        let mut clients = MockClientRepository::new();
        clients
            .expect_find_by_id()
            .times(1)
            .returning(|_| {
                Box::pin(ready(Err(CoreError::ServerError(
                    "ConnectionError".to_string(),
                ))))
            });

        let service = service_with(clients, MockMedicalHistoryRepository::new());

        assert_eq!(
            service.get_client(3).await.unwrap_err(),
            CoreError::ServerError("ConnectionError".to_string())
        );
    }

    #[tokio::test]
    async fn duplicate_email_gets_a_readable_message() {
        let mut clients = MockClientRepository::new();
        clients
            .expect_create()
            .times(1)
            .returning(|_| {
                Box::pin(ready(Err(CoreError::DuplicateKey(
                    "clients_email_key".to_string(),
                ))))
            });

        let service = service_with(clients, MockMedicalHistoryRepository::new());
        let err = service
            .create_client(CreateClientInput {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                dob: Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap(),
                gender: "female".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                address: "12 St James's Square".to_string(),
                food_allergies: "none".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::DuplicateKey("Client with this email already exists!".to_string())
        );
    }

    #[tokio::test]
    async fn unknown_client_stops_the_medical_history_upsert() {
        let mut clients = MockClientRepository::new();
        clients
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Box::pin(ready(Ok(None))));

        let mut histories = MockMedicalHistoryRepository::new();
        histories.expect_find_by_id().never();
        histories.expect_create().never();

        let service = service_with(clients, histories);
        let err = service
            .upsert_medical_history(
                7,
                MedicalHistoryPatch {
                    client_id: Some(42),
                    date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
                    height: Some("170".to_string()),
                    weight: Some("62".to_string()),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::NotFound("Invalid client for id: 42!".to_string())
        );
    }
}
