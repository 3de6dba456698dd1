use axum::extract::State;
use foodboot_core::domain::calendar::{entities::Calendar, ports::CalendarService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    calendar::validators::CalendarValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCalendarResponse {
    pub message: String,
    pub calendar: Calendar,
}

#[utoipa::path(
    post,
    path = "/calendars/create",
    tag = "calendar",
    summary = "Create a calendar",
    request_body = CalendarValidator,
    responses(
        (status = 200, body = CreateCalendarResponse),
        (status = 409, description = "Calendar for this user already exists"),
        (status = 422, description = "Missing fields")
    )
)]
pub async fn create_calendar(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CalendarValidator>,
) -> Result<Response<CreateCalendarResponse>, ApiError> {
    let user_email = payload.user_email.ok_or_else(ApiError::missing_fields)?;

    let calendar = state.service.create_calendar(user_email).await?;

    Ok(Response::OK(CreateCalendarResponse {
        message: "Calendar created!".to_string(),
        calendar,
    }))
}
