use axum::extract::State;
use foodboot_core::domain::medical_history::{
    entities::MedicalHistory, ports::MedicalHistoryService,
};
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
pub struct DeleteMedicalHistoryResponse {
    pub message: String,
    pub medical_history: MedicalHistory,
}

#[utoipa::path(
    delete,
    path = "/clients/medical-histories/delete/{id}",
    tag = "medical-history",
    summary = "Delete a medical history",
    params(
        ("id" = i32, Path, description = "Medical history ID"),
    ),
    responses(
        (status = 200, body = DeleteMedicalHistoryResponse),
        (status = 404, description = "Medical history not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn delete_medical_history(
    NumericId(id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<DeleteMedicalHistoryResponse>, ApiError> {
    let medical_history = state.service.delete_medical_history(id).await?;

    Ok(Response::OK(DeleteMedicalHistoryResponse {
        message: "Medical history deleted!".to_string(),
        medical_history,
    }))
}
