use axum::extract::State;
use foodboot_core::domain::meal_plan::{entities::MealPlan, ports::MealPlanService};

use crate::application::http::{
    path_params::NumericId,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/meal-plans/{client_id}",
    tag = "meal-plan",
    summary = "Get a client's meal plan",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, body = MealPlan),
        (status = 404, description = "Meal plan not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn get_meal_plan(
    NumericId(client_id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<MealPlan>, ApiError> {
    let plan = state.service.get_meal_plan(client_id).await?;

    Ok(Response::OK(plan))
}
