use tracing::info;

use crate::domain::{
    calendar::ports::CalendarRepository,
    calendar_event::ports::CalendarEventRepository,
    client::ports::ClientRepository,
    common::{entities::app_errors::CoreError, services::Service, value_objects::ListQuery},
    customer::{
        entities::Customer,
        ports::{CustomerRepository, CustomerService},
        value_objects::{CreateCustomerInput, UpdateCustomerInput},
    },
    food_combination::ports::FoodCombinationRepository,
    food_option::ports::FoodOptionRepository,
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

const DUPLICATE_EMAIL: &str = "Customer with this email already exists!";

fn customer_not_found(id: i32) -> CoreError {
    CoreError::NotFound(format!("Customer not found for id: {id}!"))
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> CustomerService
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
    async fn get_customers(&self, query: ListQuery) -> Result<Vec<Customer>, CoreError> {
        self.customer_repository.find_all(query).await
    }

    async fn get_customer(&self, id: i32) -> Result<Customer, CoreError> {
        self.customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| customer_not_found(id))
    }

    async fn create_customer(&self, input: CreateCustomerInput) -> Result<Customer, CoreError> {
        let customer = self
            .customer_repository
            .create(input)
            .await
            .map_err(|e| e.on_duplicate(DUPLICATE_EMAIL))?;

        info!(customer_id = customer.id, "customer created");
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: i32,
        input: UpdateCustomerInput,
    ) -> Result<Customer, CoreError> {
        let mut customer = self.get_customer(id).await?;
        customer.update(input);

        self.customer_repository
            .update(customer)
            .await
            .map_err(|e| e.on_duplicate(DUPLICATE_EMAIL))
    }

    async fn delete_customer(&self, id: i32) -> Result<Customer, CoreError> {
        let customer = self.get_customer(id).await?;

        if !self.customer_repository.delete(id).await? {
            return Err(customer_not_found(id));
        }

        Ok(customer)
    }
}
