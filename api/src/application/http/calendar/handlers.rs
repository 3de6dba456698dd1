pub mod create_calendar;
pub mod delete_calendar;
pub mod get_calendar;
pub mod get_calendars;
