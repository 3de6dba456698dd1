use axum::extract::State;
use foodboot_core::domain::food_preference::{
    entities::FoodPreference, ports::FoodPreferenceService,
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
pub struct DeleteFoodPreferenceResponse {
    pub message: String,
    pub food_preference: FoodPreference,
}

#[utoipa::path(
    delete,
    path = "/clients/food-preferences/delete/{client_id}",
    tag = "food-preference",
    summary = "Delete a client's food preferences",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, body = DeleteFoodPreferenceResponse),
        (status = 404, description = "Food preferences not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn delete_food_preference(
    NumericId(client_id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<DeleteFoodPreferenceResponse>, ApiError> {
    let food_preference = state.service.delete_food_preference(client_id).await?;

    Ok(Response::OK(DeleteFoodPreferenceResponse {
        message: "Food Preferences deleted!".to_string(),
        food_preference,
    }))
}
