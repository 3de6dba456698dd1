use super::handlers::{
    count_calendar_events::{__path_count_calendar_events, count_calendar_events},
    create_calendar_event::{__path_create_calendar_event, create_calendar_event},
    delete_calendar_event::{__path_delete_calendar_event, delete_calendar_event},
    get_calendar_events::{__path_get_calendar_events, get_calendar_events},
    update_calendar_event::{__path_update_calendar_event, update_calendar_event},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_calendar_events,
    count_calendar_events,
    create_calendar_event,
    update_calendar_event,
    delete_calendar_event
))]
pub struct CalendarEventApiDoc;

pub fn calendar_event_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/calendars/calendar-events/{{user_email}}"),
            get(get_calendar_events),
        )
        .route(
            &format!("{root_path}/calendars/calendar-events/count/{{user_email}}"),
            get(count_calendar_events),
        )
        .route(
            &format!("{root_path}/calendars/calendar-events/create"),
            post(create_calendar_event),
        )
        .route(
            &format!("{root_path}/calendars/calendar-events/update/{{id}}"),
            put(update_calendar_event),
        )
        .route(
            &format!("{root_path}/calendars/calendar-events/delete/{{id}}"),
            delete(delete_calendar_event),
        )
}
