use axum::extract::{Path, State};
use foodboot_core::domain::calendar::{entities::Calendar, ports::CalendarService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/calendars/{user_email}",
    tag = "calendar",
    summary = "Get a user's calendar",
    params(
        ("user_email" = String, Path, description = "Owner email"),
    ),
    responses(
        (status = 200, body = Calendar),
        (status = 404, description = "Calendar not found")
    )
)]
pub async fn get_calendar(
    Path(user_email): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Calendar>, ApiError> {
    let calendar = state.service.get_calendar(user_email).await?;

    Ok(Response::OK(calendar))
}
