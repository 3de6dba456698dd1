use super::handlers::{
    create_calendar::{__path_create_calendar, create_calendar},
    delete_calendar::{__path_delete_calendar, delete_calendar},
    get_calendar::{__path_get_calendar, get_calendar},
    get_calendars::{__path_get_calendars, get_calendars},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_calendars, get_calendar, create_calendar, delete_calendar))]
pub struct CalendarApiDoc;

pub fn calendar_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/calendars"), get(get_calendars))
        .route(
            &format!("{root_path}/calendars/{{user_email}}"),
            get(get_calendar),
        )
        .route(
            &format!("{root_path}/calendars/create"),
            post(create_calendar),
        )
        .route(
            &format!("{root_path}/calendars/delete"),
            delete(delete_calendar),
        )
}
