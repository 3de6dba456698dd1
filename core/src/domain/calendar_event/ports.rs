use crate::domain::{
    calendar_event::{
        entities::CalendarEvent,
        value_objects::{CreateCalendarEventInput, UpdateCalendarEventInput},
    },
    common::{entities::app_errors::CoreError, value_objects::Counted},
};

pub trait CalendarEventService: Send + Sync {
    fn get_calendar_events(
        &self,
        user_email: String,
    ) -> impl Future<Output = Result<Vec<CalendarEvent>, CoreError>> + Send;

    fn count_calendar_events(
        &self,
        user_email: String,
    ) -> impl Future<Output = Result<Counted<CalendarEvent>, CoreError>> + Send;

    fn create_calendar_event(
        &self,
        input: CreateCalendarEventInput,
    ) -> impl Future<Output = Result<CalendarEvent, CoreError>> + Send;

    fn update_calendar_event(
        &self,
        id: String,
        input: UpdateCalendarEventInput,
    ) -> impl Future<Output = Result<CalendarEvent, CoreError>> + Send;

    fn delete_calendar_event(
        &self,
        id: String,
    ) -> impl Future<Output = Result<CalendarEvent, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CalendarEventRepository: Send + Sync {
    fn find_by_user(
        &self,
        user_email: String,
    ) -> impl Future<Output = Result<Vec<CalendarEvent>, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<CalendarEvent>, CoreError>> + Send;

    fn create(
        &self,
        event: CalendarEvent,
    ) -> impl Future<Output = Result<CalendarEvent, CoreError>> + Send;

    fn update(
        &self,
        event: CalendarEvent,
    ) -> impl Future<Output = Result<CalendarEvent, CoreError>> + Send;

    fn delete(&self, id: String) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
