use axum::extract::State;
use foodboot_core::domain::customer::{entities::Customer, ports::CustomerService};
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
pub struct DeleteCustomerResponse {
    pub message: String,
    pub customer: Customer,
}

#[utoipa::path(
    delete,
    path = "/customers/delete/{id}",
    tag = "customer",
    summary = "Delete a customer",
    params(
        ("id" = i32, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = DeleteCustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn delete_customer(
    NumericId(id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<DeleteCustomerResponse>, ApiError> {
    let customer = state.service.delete_customer(id).await?;

    Ok(Response::OK(DeleteCustomerResponse {
        message: "Customer deleted!".to_string(),
        customer,
    }))
}
