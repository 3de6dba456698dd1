use axum::extract::State;
use foodboot_core::domain::customer::{entities::Customer, ports::CustomerService};

use crate::application::http::{
    path_params::NumericId,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customer",
    summary = "Get a customer",
    params(
        ("id" = i32, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn get_customer(
    NumericId(id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<Customer>, ApiError> {
    let customer = state.service.get_customer(id).await?;

    Ok(Response::OK(customer))
}
