pub mod count_clients;
pub mod create_client;
pub mod delete_client;
pub mod get_client;
pub mod get_client_by_email;
pub mod get_clients;
pub mod get_clients_ordered;
pub mod update_client;
