use axum::extract::State;
use foodboot_core::domain::customer::{
    entities::Customer, ports::CustomerService, value_objects::CreateCustomerInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    customer::validators::CreateCustomerValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCustomerResponse {
    pub message: String,
    pub customer: Customer,
}

#[utoipa::path(
    post,
    path = "/customers/create",
    tag = "customer",
    summary = "Create a customer",
    request_body = CreateCustomerValidator,
    responses(
        (status = 200, body = CreateCustomerResponse),
        (status = 409, description = "Customer with this email already exists"),
        (status = 422, description = "Missing fields")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCustomerValidator>,
) -> Result<Response<CreateCustomerResponse>, ApiError> {
    let (Some(name), Some(surname), Some(email)) = (payload.name, payload.surname, payload.email)
    else {
        return Err(ApiError::missing_fields());
    };

    let customer = state
        .service
        .create_customer(CreateCustomerInput {
            name,
            surname,
            email,
        })
        .await?;

    Ok(Response::OK(CreateCustomerResponse {
        message: "Customer added".to_string(),
        customer,
    }))
}
