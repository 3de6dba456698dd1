use axum::extract::State;
use foodboot_core::domain::food_option::{entities::FoodOption, ports::FoodOptionService};
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
pub struct DeleteFoodOptionResponse {
    pub message: String,
    pub food_option: FoodOption,
}

#[utoipa::path(
    delete,
    path = "/food-options/delete/{id}",
    tag = "food-option",
    summary = "Delete a food option",
    params(
        ("id" = i32, Path, description = "Food option ID"),
    ),
    responses(
        (status = 200, body = DeleteFoodOptionResponse),
        (status = 404, description = "Food option not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn delete_food_option(
    NumericId(id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<DeleteFoodOptionResponse>, ApiError> {
    let food_option = state.service.delete_food_option(id).await?;

    Ok(Response::OK(DeleteFoodOptionResponse {
        message: "Food option deleted!".to_string(),
        food_option,
    }))
}
