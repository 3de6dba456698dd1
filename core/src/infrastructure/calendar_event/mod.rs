pub mod mappers;
pub mod repositories;

pub use repositories::calendar_event_repository::PostgresCalendarEventRepository;
