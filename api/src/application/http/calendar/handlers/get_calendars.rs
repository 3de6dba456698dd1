use axum::extract::State;
use foodboot_core::domain::calendar::{entities::Calendar, ports::CalendarService};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/calendars",
    tag = "calendar",
    summary = "List calendars",
    params(
        ("sort" = Option<String>, Query, description = "`user_email` or `-user_email`"),
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, between 1 and 100"),
    ),
    responses(
        (status = 200, body = [Calendar])
    )
)]
pub async fn get_calendars(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<Vec<Calendar>>, ApiError> {
    let calendars = state.service.get_calendars(query).await?;

    Ok(Response::OK(calendars))
}
