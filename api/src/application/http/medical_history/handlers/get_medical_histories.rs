use axum::extract::State;
use foodboot_core::domain::medical_history::{
    entities::MedicalHistory, ports::MedicalHistoryService,
};

use crate::application::http::{
    path_params::NumericId,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/clients/medical-histories/{client_id}",
    tag = "medical-history",
    summary = "List a client's medical histories",
    description = "Most recent first. An unknown client yields an empty array.",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, body = [MedicalHistory]),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn get_medical_histories(
    NumericId(client_id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<Vec<MedicalHistory>>, ApiError> {
    let histories = state.service.get_medical_histories(client_id).await?;

    Ok(Response::OK(histories))
}
