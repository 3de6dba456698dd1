pub mod calendar_event_repository;
