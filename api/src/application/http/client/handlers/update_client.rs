use axum::extract::State;
use foodboot_core::domain::client::{
    entities::Client, ports::ClientService, value_objects::UpdateClientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    client::validators::UpdateClientValidator,
    path_params::NumericId,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateClientResponse {
    pub message: String,
    pub client: Client,
}

#[utoipa::path(
    put,
    path = "/clients/update/{id}",
    tag = "client",
    summary = "Update a client",
    description = "Only non-empty fields overwrite the stored values.",
    params(
        ("id" = i32, Path, description = "Client ID"),
    ),
    request_body = UpdateClientValidator,
    responses(
        (status = 200, body = UpdateClientResponse),
        (status = 404, description = "Client not found"),
        (status = 409, description = "Client with this email already exists"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn update_client(
    NumericId(id): NumericId,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateClientValidator>,
) -> Result<Response<UpdateClientResponse>, ApiError> {
    let client = state
        .service
        .update_client(
            id,
            UpdateClientInput {
                first_name: payload.first_name,
                last_name: payload.last_name,
                dob: payload.dob,
                gender: payload.gender,
                email: payload.email,
                phone: payload.phone,
                address: payload.address,
                food_allergies: payload.food_allergies,
            },
        )
        .await?;

    Ok(Response::OK(UpdateClientResponse {
        message: "Client updated!".to_string(),
        client,
    }))
}
