use axum::extract::State;
use foodboot_core::domain::food_preference::{
    entities::FoodPreference, ports::FoodPreferenceService,
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
    path = "/clients/food-preferences/{client_id}",
    tag = "food-preference",
    summary = "Get a client's food preferences",
    description = "An array with the client's single preference row, or an empty array.",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, body = [FoodPreference]),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn get_food_preferences(
    NumericId(client_id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<Vec<FoodPreference>>, ApiError> {
    let preferences = state.service.get_food_preferences(client_id).await?;

    Ok(Response::OK(preferences))
}
