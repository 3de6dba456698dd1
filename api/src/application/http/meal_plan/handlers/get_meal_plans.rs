use axum::extract::State;
use foodboot_core::domain::meal_plan::{entities::MealPlan, ports::MealPlanService};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/meal-plans",
    tag = "meal-plan",
    summary = "List meal plans",
    params(
        ("sort" = Option<String>, Query, description = "Comma separated columns, `-` prefix for descending"),
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, between 1 and 100"),
    ),
    responses(
        (status = 200, body = [MealPlan])
    )
)]
pub async fn get_meal_plans(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<Vec<MealPlan>>, ApiError> {
    let plans = state.service.get_meal_plans(query).await?;

    Ok(Response::OK(plans))
}
