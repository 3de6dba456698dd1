pub mod mappers;
pub mod repositories;

pub use repositories::calendar_repository::PostgresCalendarRepository;
