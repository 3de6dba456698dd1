use axum::extract::State;
use foodboot_core::domain::calendar_event::{
    entities::CalendarEvent, ports::CalendarEventService,
    value_objects::CreateCalendarEventInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    calendar_event::validators::CreateCalendarEventValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCalendarEventResponse {
    pub message: String,
    pub calendar_event: CalendarEvent,
}

#[utoipa::path(
    post,
    path = "/calendars/calendar-events/create",
    tag = "calendar-event",
    summary = "Create a calendar event",
    description = "`start` and `end` default to empty strings and `allDay` to `false`. \
        The calendar of `user_email` must exist.",
    request_body = CreateCalendarEventValidator,
    responses(
        (status = 200, body = CreateCalendarEventResponse),
        (status = 404, description = "Calendar not found"),
        (status = 409, description = "Calendar event already exists"),
        (status = 422, description = "Missing fields")
    )
)]
pub async fn create_calendar_event(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCalendarEventValidator>,
) -> Result<Response<CreateCalendarEventResponse>, ApiError> {
    let (Some(id), Some(user_email), Some(title)) = (payload.id, payload.user_email, payload.title)
    else {
        return Err(ApiError::missing_fields());
    };

    let calendar_event = state
        .service
        .create_calendar_event(CreateCalendarEventInput {
            id,
            user_email,
            title,
            start: payload.start,
            end: payload.end,
            all_day: payload.all_day,
        })
        .await?;

    Ok(Response::OK(CreateCalendarEventResponse {
        message: "Calendar Event added!".to_string(),
        calendar_event,
    }))
}
