use axum::extract::State;
use foodboot_core::domain::{
    client::{entities::Client, ports::ClientService},
    common::value_objects::{ListQuery, SortField},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/clients/order",
    tag = "client",
    summary = "List clients by last name",
    description = "Lists every client ordered by `last_name` ascending.",
    responses(
        (status = 200, body = [Client])
    )
)]
pub async fn get_clients_ordered(
    State(state): State<AppState>,
) -> Result<Response<Vec<Client>>, ApiError> {
    let clients = state
        .service
        .get_clients(ListQuery::ordered_by(SortField::asc("last_name")))
        .await?;

    Ok(Response::OK(clients))
}
