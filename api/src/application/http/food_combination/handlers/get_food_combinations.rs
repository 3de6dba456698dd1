use axum::extract::State;
use foodboot_core::domain::food_combination::{
    entities::FoodCombination, ports::FoodCombinationService,
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
    path = "/meal-plans/food-combinations/{meal_plan_id}",
    tag = "food-combination",
    summary = "List a meal plan's food combinations",
    description = "Ordered by `start`.",
    params(
        ("meal_plan_id" = i32, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = [FoodCombination]),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn get_food_combinations(
    NumericId(meal_plan_id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<Vec<FoodCombination>>, ApiError> {
    let combinations = state.service.get_food_combinations(meal_plan_id).await?;

    Ok(Response::OK(combinations))
}
