use super::handlers::{
    create_customer::{__path_create_customer, create_customer},
    delete_customer::{__path_delete_customer, delete_customer},
    get_customer::{__path_get_customer, get_customer},
    get_customers::{__path_get_customers, get_customers},
    update_customer::{__path_update_customer, update_customer},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_customers,
    get_customer,
    create_customer,
    update_customer,
    delete_customer
))]
pub struct CustomerApiDoc;

pub fn customer_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/customers"), get(get_customers))
        .route(
            &format!("{root_path}/customers/{{id}}"),
            get(get_customer),
        )
        .route(
            &format!("{root_path}/customers/create"),
            post(create_customer),
        )
        .route(
            &format!("{root_path}/customers/update/{{id}}"),
            put(update_customer),
        )
        .route(
            &format!("{root_path}/customers/delete/{{id}}"),
            delete(delete_customer),
        )
}
