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
pub struct DeleteCalendarResponse {
    pub message: String,
    pub calendar: Calendar,
}

#[utoipa::path(
    delete,
    path = "/calendars/delete",
    tag = "calendar",
    summary = "Delete a calendar",
    description = "The owner is given in the body as `{\"user_email\": ...}`.",
    request_body = CalendarValidator,
    responses(
        (status = 200, body = DeleteCalendarResponse),
        (status = 404, description = "Calendar not found"),
        (status = 422, description = "Missing fields")
    )
)]
pub async fn delete_calendar(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CalendarValidator>,
) -> Result<Response<DeleteCalendarResponse>, ApiError> {
    let user_email = payload.user_email.ok_or_else(ApiError::missing_fields)?;

    let calendar = state.service.delete_calendar(user_email).await?;

    Ok(Response::OK(DeleteCalendarResponse {
        message: "Calendar deleted!".to_string(),
        calendar,
    }))
}
