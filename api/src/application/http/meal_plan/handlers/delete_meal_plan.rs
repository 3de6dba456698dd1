use axum::extract::State;
use foodboot_core::domain::meal_plan::{entities::MealPlan, ports::MealPlanService};
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
pub struct DeleteMealPlanResponse {
    pub message: String,
    pub meal_plan: MealPlan,
}

#[utoipa::path(
    delete,
    path = "/meal-plans/delete/{client_id}",
    tag = "meal-plan",
    summary = "Delete a client's meal plan",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, body = DeleteMealPlanResponse),
        (status = 404, description = "Meal plan not found"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn delete_meal_plan(
    NumericId(client_id): NumericId,
    State(state): State<AppState>,
) -> Result<Response<DeleteMealPlanResponse>, ApiError> {
    let meal_plan = state.service.delete_meal_plan(client_id).await?;

    Ok(Response::OK(DeleteMealPlanResponse {
        message: "Meal Plan deleted!".to_string(),
        meal_plan,
    }))
}
