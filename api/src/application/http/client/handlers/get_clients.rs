use axum::extract::State;
use foodboot_core::domain::client::{entities::Client, ports::ClientService};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/clients",
    tag = "client",
    summary = "List clients",
    description = "Lists every client. Accepts `sort` (e.g. `-last_name,first_name`), `offset` and `limit`.",
    params(
        ("sort" = Option<String>, Query, description = "Comma separated columns, `-` prefix for descending"),
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, between 1 and 100"),
    ),
    responses(
        (status = 200, body = [Client]),
        (status = 500, description = "Server error")
    )
)]
pub async fn get_clients(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<Vec<Client>>, ApiError> {
    state
        .service
        .get_clients(query)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
