use axum::extract::{Path, State};
use foodboot_core::domain::{
    calendar_event::{entities::CalendarEvent, ports::CalendarEventService},
    common::value_objects::Counted,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CountCalendarEventsResponse {
    pub count: u64,
    pub rows: Vec<CalendarEvent>,
}

impl From<Counted<CalendarEvent>> for CountCalendarEventsResponse {
    fn from(counted: Counted<CalendarEvent>) -> Self {
        Self {
            count: counted.count,
            rows: counted.rows,
        }
    }
}

#[utoipa::path(
    get,
    path = "/calendars/calendar-events/count/{user_email}",
    tag = "calendar-event",
    summary = "Count a user's calendar events",
    params(
        ("user_email" = String, Path, description = "Owner email"),
    ),
    responses(
        (status = 200, body = CountCalendarEventsResponse)
    )
)]
pub async fn count_calendar_events(
    Path(user_email): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<CountCalendarEventsResponse>, ApiError> {
    let counted = state.service.count_calendar_events(user_email).await?;

    Ok(Response::OK(CountCalendarEventsResponse::from(counted)))
}
