pub mod medical_history_repository;
