use axum::extract::State;
use foodboot_core::domain::{
    client::{entities::Client, ports::ClientService},
    common::value_objects::Counted,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CountClientsResponse {
    pub count: u64,
    pub rows: Vec<Client>,
}

impl From<Counted<Client>> for CountClientsResponse {
    fn from(counted: Counted<Client>) -> Self {
        Self {
            count: counted.count,
            rows: counted.rows,
        }
    }
}

#[utoipa::path(
    get,
    path = "/clients/count",
    tag = "client",
    summary = "Count clients",
    responses(
        (status = 200, body = CountClientsResponse)
    )
)]
pub async fn count_clients(
    State(state): State<AppState>,
) -> Result<Response<CountClientsResponse>, ApiError> {
    let counted = state.service.count_clients().await?;

    Ok(Response::OK(CountClientsResponse::from(counted)))
}
