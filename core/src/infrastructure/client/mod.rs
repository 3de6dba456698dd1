pub mod mappers;
pub mod repositories;

pub use repositories::client_repository::PostgresClientRepository;
