use axum::extract::State;
use foodboot_core::domain::client::{
    entities::Client, ports::ClientService, value_objects::CreateClientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    client::validators::CreateClientValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateClientResponse {
    pub message: String,
    pub client: Client,
}

impl TryFrom<CreateClientValidator> for CreateClientInput {
    type Error = ApiError;

    fn try_from(payload: CreateClientValidator) -> Result<Self, Self::Error> {
        let (
            Some(first_name),
            Some(last_name),
            Some(dob),
            Some(gender),
            Some(email),
            Some(phone),
            Some(address),
            Some(food_allergies),
        ) = (
            payload.first_name,
            payload.last_name,
            payload.dob,
            payload.gender,
            payload.email,
            payload.phone,
            payload.address,
            payload.food_allergies,
        )
        else {
            return Err(ApiError::missing_fields());
        };

        Ok(CreateClientInput {
            first_name,
            last_name,
            dob,
            gender,
            email,
            phone,
            address,
            food_allergies,
        })
    }
}

#[utoipa::path(
    post,
    path = "/clients/create",
    tag = "client",
    summary = "Create a client",
    description = "Every field is required; `dob` accepts a date or an RFC 3339 timestamp.",
    request_body = CreateClientValidator,
    responses(
        (status = 200, body = CreateClientResponse),
        (status = 409, description = "Client with this email already exists"),
        (status = 422, description = "Missing fields")
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateClientValidator>,
) -> Result<Response<CreateClientResponse>, ApiError> {
    let client = state
        .service
        .create_client(CreateClientInput::try_from(payload)?)
        .await?;

    Ok(Response::OK(CreateClientResponse {
        message: "Client added!".to_string(),
        client,
    }))
}
