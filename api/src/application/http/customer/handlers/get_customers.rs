use axum::extract::State;
use foodboot_core::domain::customer::{entities::Customer, ports::CustomerService};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customer",
    summary = "List customers",
    params(
        ("sort" = Option<String>, Query, description = "Comma separated columns, `-` prefix for descending"),
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, between 1 and 100"),
    ),
    responses(
        (status = 200, body = [Customer])
    )
)]
pub async fn get_customers(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<Vec<Customer>>, ApiError> {
    let customers = state.service.get_customers(query).await?;

    Ok(Response::OK(customers))
}
