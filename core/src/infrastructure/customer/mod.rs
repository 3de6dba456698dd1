pub mod mappers;
pub mod repositories;

pub use repositories::customer_repository::PostgresCustomerRepository;
