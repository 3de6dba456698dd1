use axum::extract::{Path, State};
use foodboot_core::domain::calendar_event::{
    entities::CalendarEvent, ports::CalendarEventService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/calendars/calendar-events/{user_email}",
    tag = "calendar-event",
    summary = "List a user's calendar events",
    description = "Events ordered by `start`. A user without events gets an empty array.",
    params(
        ("user_email" = String, Path, description = "Owner email"),
    ),
    responses(
        (status = 200, body = [CalendarEvent])
    )
)]
pub async fn get_calendar_events(
    Path(user_email): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<CalendarEvent>>, ApiError> {
    let events = state.service.get_calendar_events(user_email).await?;

    Ok(Response::OK(events))
}
