use super::handlers::{
    delete_food_combination::{__path_delete_food_combination, delete_food_combination},
    get_food_combinations::{__path_get_food_combinations, get_food_combinations},
    upsert_food_combination::{__path_upsert_food_combination, upsert_food_combination},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_food_combinations, upsert_food_combination, delete_food_combination))]
pub struct FoodCombinationApiDoc;

pub fn food_combination_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/meal-plans/food-combinations/{{meal_plan_id}}"),
            get(get_food_combinations),
        )
        .route(
            &format!("{root_path}/meal-plans/food-combinations/update/{{id}}"),
            put(upsert_food_combination),
        )
        .route(
            &format!("{root_path}/meal-plans/food-combinations/delete/{{id}}"),
            delete(delete_food_combination),
        )
}
