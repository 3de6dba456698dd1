use tracing::info;

use crate::domain::{
    calendar::{ports::CalendarRepository, services::calendar_not_found},
    calendar_event::{
        entities::CalendarEvent,
        ports::{CalendarEventRepository, CalendarEventService},
        value_objects::{CreateCalendarEventInput, UpdateCalendarEventInput},
    },
    client::ports::ClientRepository,
    common::{entities::app_errors::CoreError, services::Service, value_objects::Counted},
    customer::ports::CustomerRepository,
    food_combination::ports::FoodCombinationRepository,
    food_option::ports::FoodOptionRepository,
    food_preference::ports::FoodPreferenceRepository,
    meal_plan::ports::MealPlanRepository,
    medical_history::ports::MedicalHistoryRepository,
};

fn event_not_found(id: &str) -> CoreError {
    CoreError::NotFound(format!("Calendar Event not found for id: {id}!"))
}

impl<CL, MH, FP, FO, CA, CE, MP, FC, CU> CalendarEventService
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
    async fn get_calendar_events(&self, user_email: String) -> Result<Vec<CalendarEvent>, CoreError> {
        self.calendar_event_repository.find_by_user(user_email).await
    }

    async fn count_calendar_events(
        &self,
        user_email: String,
    ) -> Result<Counted<CalendarEvent>, CoreError> {
        let events = self.calendar_event_repository.find_by_user(user_email).await?;
        Ok(Counted::from(events))
    }

    async fn create_calendar_event(
        &self,
        input: CreateCalendarEventInput,
    ) -> Result<CalendarEvent, CoreError> {
        if self
            .calendar_repository
            .find_by_email(input.user_email.clone())
            .await?
            .is_none()
        {
            return Err(calendar_not_found(&input.user_email));
        }

        let event = self
            .calendar_event_repository
            .create(CalendarEvent::new(input))
            .await
            .map_err(|e| e.on_duplicate("Calendar event already exists!"))?;

        info!(event_id = %event.id, user_email = %event.user_email, "calendar event created");
        Ok(event)
    }

    async fn update_calendar_event(
        &self,
        id: String,
        input: UpdateCalendarEventInput,
    ) -> Result<CalendarEvent, CoreError> {
        let mut event = self
            .calendar_event_repository
            .find_by_id(id.clone())
            .await?
            .ok_or_else(|| event_not_found(&id))?;

        event.update(input);
        self.calendar_event_repository.update(event).await
    }

    async fn delete_calendar_event(&self, id: String) -> Result<CalendarEvent, CoreError> {
        let event = self
            .calendar_event_repository
            .find_by_id(id.clone())
            .await?
            .ok_or_else(|| event_not_found(&id))?;

        if !self.calendar_event_repository.delete(id.clone()).await? {
            return Err(event_not_found(&id));
        }

        Ok(event)
    }
}
