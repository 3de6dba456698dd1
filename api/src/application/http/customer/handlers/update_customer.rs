use axum::extract::State;
use foodboot_core::domain::customer::{
    entities::Customer, ports::CustomerService, value_objects::UpdateCustomerInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    customer::validators::UpdateCustomerValidator,
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
pub struct UpdateCustomerResponse {
    pub message: String,
    pub customer: Customer,
}

#[utoipa::path(
    put,
    path = "/customers/update/{id}",
    tag = "customer",
    summary = "Update a customer",
    params(
        ("id" = i32, Path, description = "Customer ID"),
    ),
    request_body = UpdateCustomerValidator,
    responses(
        (status = 200, body = UpdateCustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer with this email already exists"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn update_customer(
    NumericId(id): NumericId,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCustomerValidator>,
) -> Result<Response<UpdateCustomerResponse>, ApiError> {
    let customer = state
        .service
        .update_customer(
            id,
            UpdateCustomerInput {
                name: payload.name,
                surname: payload.surname,
                email: payload.email,
            },
        )
        .await?;

    Ok(Response::OK(UpdateCustomerResponse {
        message: "Customer updated!".to_string(),
        customer,
    }))
}
