pub mod mappers;
pub mod repositories;

pub use repositories::food_combination_repository::PostgresFoodCombinationRepository;
