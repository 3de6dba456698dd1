use axum::extract::State;
use foodboot_core::domain::client::{entities::Client, ports::ClientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    path_params::NumericId,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteClientResponse {
    pub message: String,
    pub client: Client,
}

#[utoipa::path(
    delete,
    path = "/clients/delete/{id}",
    tag = "client",
    summary = "Delete a client",
    description = "Deletes the client and answers with the removed row.",
    params(
        ("id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, body = DeleteClientResponse),
        (status = 404, description = "Client not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn delete_client(
    NumericId(id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<DeleteClientResponse>, ApiError> {
    let client = state.service.delete_client(id).await?;

    Ok(Response::OK(DeleteClientResponse {
        message: "Client deleted!".to_string(),
        client,
    }))
}
