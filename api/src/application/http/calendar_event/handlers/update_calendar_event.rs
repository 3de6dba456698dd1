use axum::extract::{Path, State};
use foodboot_core::domain::calendar_event::{
    entities::CalendarEvent, ports::CalendarEventService,
    value_objects::UpdateCalendarEventInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    calendar_event::validators::UpdateCalendarEventValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCalendarEventResponse {
    pub message: String,
    pub calendar_event: CalendarEvent,
}

#[utoipa::path(
    put,
    path = "/calendars/calendar-events/update/{id}",
    tag = "calendar-event",
    summary = "Update a calendar event",
    description = "Only non-empty `title`, `start`, `end` and a `true` `allDay` overwrite the stored values.",
    params(
        ("id" = String, Path, description = "Calendar event ID"),
    ),
    request_body = UpdateCalendarEventValidator,
    responses(
        (status = 200, body = UpdateCalendarEventResponse),
        (status = 404, description = "Calendar event not found")
    )
)]
pub async fn update_calendar_event(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCalendarEventValidator>,
) -> Result<Response<UpdateCalendarEventResponse>, ApiError> {
    let calendar_event = state
        .service
        .update_calendar_event(
            id,
            UpdateCalendarEventInput {
                title: payload.title,
                start: payload.start,
                end: payload.end,
                all_day: payload.all_day,
            },
        )
        .await?;

    Ok(Response::OK(UpdateCalendarEventResponse {
        message: "Calendar event updated!".to_string(),
        calendar_event,
    }))
}
