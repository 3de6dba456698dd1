use axum::extract::State;
use foodboot_core::domain::food_option::{entities::FoodOption, ports::FoodOptionService};

use crate::application::http::{
    path_params::NumericId,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/food-options/{id}",
    tag = "food-option",
    summary = "Get a food option",
    params(
        ("id" = i32, Path, description = "Food option ID"),
    ),
    responses(
        (status = 200, body = FoodOption),
        (status = 404, description = "Food option not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn get_food_option(
    NumericId(id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<FoodOption>, ApiError> {
    let option = state.service.get_food_option(id).await?;

    Ok(Response::OK(option))
}
