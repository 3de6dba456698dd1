pub mod calendar_repository;
