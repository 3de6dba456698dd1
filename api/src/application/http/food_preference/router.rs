use super::handlers::{
    delete_food_preference::{__path_delete_food_preference, delete_food_preference},
    get_food_preferences::{__path_get_food_preferences, get_food_preferences},
    upsert_food_preference::{__path_upsert_food_preference, upsert_food_preference},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_food_preferences, upsert_food_preference, delete_food_preference))]
pub struct FoodPreferenceApiDoc;

pub fn food_preference_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/clients/food-preferences/{{client_id}}"),
            get(get_food_preferences),
        )
        .route(
            &format!("{root_path}/clients/food-preferences/update/{{client_id}}"),
            put(upsert_food_preference),
        )
        .route(
            &format!("{root_path}/clients/food-preferences/delete/{{client_id}}"),
            delete(delete_food_preference),
        )
}
