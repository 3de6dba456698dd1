use axum::extract::{Path, State};
use foodboot_core::domain::calendar_event::{
    entities::CalendarEvent, ports::CalendarEventService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCalendarEventResponse {
    pub message: String,
    pub calendar_event: CalendarEvent,
}

#[utoipa::path(
    delete,
    path = "/calendars/calendar-events/delete/{id}",
    tag = "calendar-event",
    summary = "Delete a calendar event",
    params(
        ("id" = String, Path, description = "Calendar event ID"),
    ),
    responses(
        (status = 200, body = DeleteCalendarEventResponse),
        (status = 404, description = "Calendar event not found")
    )
)]
pub async fn delete_calendar_event(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCalendarEventResponse>, ApiError> {
    let calendar_event = state.service.delete_calendar_event(id).await?;

    Ok(Response::OK(DeleteCalendarEventResponse {
        message: "Calendar Event deleted!".to_string(),
        calendar_event,
    }))
}
