use axum::extract::State;
use foodboot_core::domain::client::{entities::Client, ports::ClientService};

use crate::application::http::{
    path_params::NumericId,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "client",
    summary = "Get a client",
    params(
        ("id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, body = Client),
        (status = 404, description = "Client not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn get_client(
    NumericId(id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<Client>, ApiError> {
    let client = state.service.get_client(id).await?;

    Ok(Response::OK(client))
}
