use crate::domain::{
    calendar::entities::Calendar,
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
};

pub trait CalendarService: Send + Sync {
    fn get_calendars(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Calendar>, CoreError>> + Send;

    fn get_calendar(
        &self,
        user_email: String,
    ) -> impl Future<Output = Result<Calendar, CoreError>> + Send;

    fn create_calendar(
        &self,
        user_email: String,
    ) -> impl Future<Output = Result<Calendar, CoreError>> + Send;

    fn delete_calendar(
        &self,
        user_email: String,
    ) -> impl Future<Output = Result<Calendar, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CalendarRepository: Send + Sync {
    fn find_all(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Calendar>, CoreError>> + Send;

    fn find_by_email(
        &self,
        user_email: String,
    ) -> impl Future<Output = Result<Option<Calendar>, CoreError>> + Send;

    fn create(&self, calendar: Calendar) -> impl Future<Output = Result<Calendar, CoreError>> + Send;

    fn delete(&self, user_email: String) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
