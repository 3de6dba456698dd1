use axum::extract::State;
use foodboot_core::domain::{
    common::upsert::Upserted,
    food_preference::{
        entities::FoodPreference, ports::FoodPreferenceService,
        value_objects::FoodPreferencePatch,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_preference::validators::UpsertFoodPreferenceValidator,
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
pub struct UpsertFoodPreferenceResponse {
    pub message: String,
    pub food_preference: FoodPreference,
}

impl From<Upserted<FoodPreference>> for UpsertFoodPreferenceResponse {
    fn from(upserted: Upserted<FoodPreference>) -> Self {
        let message = if upserted.is_created() {
            "Food Preferences added!"
        } else {
            "Food preferences updated!"
        };

        Self {
            message: message.to_string(),
            food_preference: upserted.into_inner(),
        }
    }
}

#[utoipa::path(
    put,
    path = "/clients/food-preferences/update/{client_id}",
    tag = "food-preference",
    summary = "Create or update a client's food preferences",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
    ),
    request_body = UpsertFoodPreferenceValidator,
    responses(
        (status = 200, body = UpsertFoodPreferenceResponse),
        (status = 404, description = "Invalid client"),
        (status = 409, description = "Food preferences for this client already exist"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn upsert_food_preference(
    NumericId(client_id): NumericId,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertFoodPreferenceValidator>,
) -> Result<Response<UpsertFoodPreferenceResponse>, ApiError> {
    let upserted = state
        .service
        .upsert_food_preference(
            client_id,
            FoodPreferencePatch {
                value: payload.value,
            },
        )
        .await?;

    Ok(Response::OK(UpsertFoodPreferenceResponse::from(upserted)))
}
