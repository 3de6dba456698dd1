use axum::extract::State;
use foodboot_core::domain::food_option::{entities::FoodOption, ports::FoodOptionService};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/food-options",
    tag = "food-option",
    summary = "List food options",
    params(
        ("sort" = Option<String>, Query, description = "Comma separated columns, `-` prefix for descending"),
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, between 1 and 100"),
    ),
    responses(
        (status = 200, body = [FoodOption])
    )
)]
pub async fn get_food_options(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<Vec<FoodOption>>, ApiError> {
    let options = state.service.get_food_options(query).await?;

    Ok(Response::OK(options))
}
