use axum::extract::{Path, State};
use foodboot_core::domain::food_combination::{
    entities::FoodCombination, ports::FoodCombinationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteFoodCombinationResponse {
    pub message: String,
    pub food_combination: FoodCombination,
}

#[utoipa::path(
    delete,
    path = "/meal-plans/food-combinations/delete/{id}",
    tag = "food-combination",
    summary = "Delete a food combination",
    params(
        ("id" = String, Path, description = "Food combination ID"),
    ),
    responses(
        (status = 200, body = DeleteFoodCombinationResponse),
        (status = 404, description = "Food combination not found")
    )
)]
pub async fn delete_food_combination(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteFoodCombinationResponse>, ApiError> {
    let food_combination = state.service.delete_food_combination(id).await?;

    Ok(Response::OK(DeleteFoodCombinationResponse {
        message: "Food combination deleted!".to_string(),
        food_combination,
    }))
}
