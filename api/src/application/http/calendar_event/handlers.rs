pub mod count_calendar_events;
pub mod create_calendar_event;
pub mod delete_calendar_event;
pub mod get_calendar_events;
pub mod update_calendar_event;
