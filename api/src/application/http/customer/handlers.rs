pub mod create_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod get_customers;
pub mod update_customer;
