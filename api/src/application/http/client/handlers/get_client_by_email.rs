use axum::extract::{Path, State};
use foodboot_core::domain::client::{entities::Client, ports::ClientService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/client/{email}",
    tag = "client",
    summary = "Get a client by email",
    params(
        ("email" = String, Path, description = "Client email"),
    ),
    responses(
        (status = 200, body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client_by_email(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Client>, ApiError> {
    let client = state.service.get_client_by_email(email).await?;

    Ok(Response::OK(client))
}
