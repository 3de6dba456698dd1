use super::handlers::{
    create_food_option::{__path_create_food_option, create_food_option},
    delete_food_option::{__path_delete_food_option, delete_food_option},
    get_food_option::{__path_get_food_option, get_food_option},
    get_food_options::{__path_get_food_options, get_food_options},
    update_food_option::{__path_update_food_option, update_food_option},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_food_options,
    get_food_option,
    create_food_option,
    update_food_option,
    delete_food_option
))]
pub struct FoodOptionApiDoc;

pub fn food_option_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/food-options"), get(get_food_options))
        .route(
            &format!("{root_path}/food-options/{{id}}"),
            get(get_food_option),
        )
        .route(
            &format!("{root_path}/food-options/create"),
            post(create_food_option),
        )
        .route(
            &format!("{root_path}/food-options/update/{{id}}"),
            put(update_food_option),
        )
        .route(
            &format!("{root_path}/food-options/delete/{{id}}"),
            delete(delete_food_option),
        )
}
