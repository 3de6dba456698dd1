pub mod mappers;
pub mod repositories;

pub use repositories::medical_history_repository::PostgresMedicalHistoryRepository;
