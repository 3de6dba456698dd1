use super::handlers::{
    delete_medical_history::{__path_delete_medical_history, delete_medical_history},
    get_medical_histories::{__path_get_medical_histories, get_medical_histories},
    upsert_medical_history::{__path_upsert_medical_history, upsert_medical_history},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_medical_histories, upsert_medical_history, delete_medical_history))]
pub struct MedicalHistoryApiDoc;

pub fn medical_history_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/clients/medical-histories/{{client_id}}"),
            get(get_medical_histories),
        )
        .route(
            &format!("{root_path}/clients/medical-histories/update/{{id}}"),
            put(upsert_medical_history),
        )
        .route(
            &format!("{root_path}/clients/medical-histories/delete/{{id}}"),
            delete(delete_medical_history),
        )
}
