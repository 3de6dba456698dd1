use tracing::info;

use crate::domain::{
    calendar::{
        entities::Calendar,
        ports::{CalendarRepository, CalendarService},
    },
    calendar_event::ports::CalendarEventRepository,
    client::ports::ClientRepository,
    common::{entities::app_errors::CoreError, services::Service, value_objects::ListQuery},
    customer::ports::CustomerRepository,
    food_combination::ports::FoodCombinationRepository,
    food_option::ports::FoodOptionRepository,
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

pub(crate) fn calendar_not_found(user_email: &str) -> CoreError {
    CoreError::NotFound(format!("Calendar not found for user_email: {user_email}!"))
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> CalendarService
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
    async fn get_calendars(&self, query: ListQuery) -> Result<Vec<Calendar>, CoreError> {
        self.calendar_repository.find_all(query).await
    }

    async fn get_calendar(&self, user_email: String) -> Result<Calendar, CoreError> {
        self.calendar_repository
            .find_by_email(user_email.clone())
            .await?
            .ok_or_else(|| calendar_not_found(&user_email))
    }

    async fn create_calendar(&self, user_email: String) -> Result<Calendar, CoreError> {
        let calendar = self
            .calendar_repository
            .create(Calendar::new(user_email))
            .await
            .map_err(|e| e.on_duplicate("Calendar for this user already exists!"))?;

        info!(user_email = %calendar.user_email, "calendar created");
        Ok(calendar)
    }

    async fn delete_calendar(&self, user_email: String) -> Result<Calendar, CoreError> {
        let calendar = self.get_calendar(user_email.clone()).await?;

        if !self.calendar_repository.delete(user_email.clone()).await? {
            return Err(calendar_not_found(&user_email));
        }

        Ok(calendar)
    }
}
