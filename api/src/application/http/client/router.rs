use super::handlers::{
    count_clients::{__path_count_clients, count_clients},
    create_client::{__path_create_client, create_client},
    delete_client::{__path_delete_client, delete_client},
    get_client::{__path_get_client, get_client},
    get_client_by_email::{__path_get_client_by_email, get_client_by_email},
    get_clients::{__path_get_clients, get_clients},
    get_clients_ordered::{__path_get_clients_ordered, get_clients_ordered},
    update_client::{__path_update_client, update_client},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_clients,
    count_clients,
    get_clients_ordered,
    get_client,
    get_client_by_email,
    create_client,
    update_client,
    delete_client
))]
pub struct ClientApiDoc;

pub fn client_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/clients"), get(get_clients))
        .route(&format!("{root_path}/clients/count"), get(count_clients))
        .route(&format!("{root_path}/clients/order"), get(get_clients_ordered))
        .route(&format!("{root_path}/clients/{{id}}"), get(get_client))
        .route(
            &format!("{root_path}/client/{{email}}"),
            get(get_client_by_email),
        )
        .route(&format!("{root_path}/clients/create"), post(create_client))
        .route(
            &format!("{root_path}/clients/update/{{id}}"),
            put(update_client),
        )
        .route(
            &format!("{root_path}/clients/delete/{{id}}"),
            delete(delete_client),
        )
}
