use super::handlers::{
    delete_meal_plan::{__path_delete_meal_plan, delete_meal_plan},
    get_meal_plan::{__path_get_meal_plan, get_meal_plan},
    get_meal_plans::{__path_get_meal_plans, get_meal_plans},
    upsert_meal_plan::{__path_upsert_meal_plan, upsert_meal_plan},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_meal_plans, get_meal_plan, upsert_meal_plan, delete_meal_plan))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/meal-plans"), get(get_meal_plans))
        .route(
            &format!("{root_path}/meal-plans/{{client_id}}"),
            get(get_meal_plan),
        )
        .route(
            &format!("{root_path}/meal-plans/update/{{client_id}}"),
            put(upsert_meal_plan),
        )
        .route(
            &format!("{root_path}/meal-plans/delete/{{client_id}}"),
            delete(delete_meal_plan),
        )
}
