use axum::extract::State;
use foodboot_core::domain::{
    common::upsert::Upserted,
    medical_history::{
        entities::MedicalHistory, ports::MedicalHistoryService,
        value_objects::MedicalHistoryPatch,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    medical_history::validators::UpsertMedicalHistoryValidator,
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
pub struct UpsertMedicalHistoryResponse {
    pub message: String,
    pub medical_history: MedicalHistory,
}

impl From<Upserted<MedicalHistory>> for UpsertMedicalHistoryResponse {
    fn from(upserted: Upserted<MedicalHistory>) -> Self {
        let message = if upserted.is_created() {
            "Medical History added!"
        } else {
            "Medical History updated!"
        };

        Self {
            message: message.to_string(),
            medical_history: upserted.into_inner(),
        }
    }
}

#[utoipa::path(
    put,
    path = "/clients/medical-histories/update/{id}",
    tag = "medical-history",
    summary = "Create or update a medical history",
    description = "Creates the record under `id` when absent, otherwise overwrites its non-empty fields. \
        `client_id`, `date`, `height` and `weight` are always required and the client must exist.",
    params(
        ("id" = i32, Path, description = "Medical history ID"),
    ),
    request_body = UpsertMedicalHistoryValidator,
    responses(
        (status = 200, body = UpsertMedicalHistoryResponse),
        (status = 404, description = "Invalid client"),
        (status = 409, description = "Medical event already recorded at that date"),
        (status = 422, description = "Missing fields or non-numeric ID")
    )
)]
pub async fn upsert_medical_history(
    NumericId(id): NumericId,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertMedicalHistoryValidator>,
) -> Result<Response<UpsertMedicalHistoryResponse>, ApiError> {
    let upserted = state
        .service
        .upsert_medical_history(
            id,
            MedicalHistoryPatch {
                client_id: payload.client_id,
                date: payload.date,
                height: payload.height,
                weight: payload.weight,
            },
        )
        .await?;

    Ok(Response::OK(UpsertMedicalHistoryResponse::from(upserted)))
}
