use std::sync::Arc;

use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::api_doc;
use crate::application::http::{
    calendar::router::calendar_routes, calendar_event::router::calendar_event_routes,
    client::router::client_routes, customer::router::customer_routes,
    food_combination::router::food_combination_routes, food_option::router::food_option_routes,
    food_preference::router::food_preference_routes, meal_plan::router::meal_plan_routes,
    medical_history::router::medical_history_routes,
};
use crate::args::Args;

use axum::Router;
use axum::http::header::{CONTENT_TYPE, HeaderName};
use axum::http::Method;
use axum::routing::get;
use foodboot_core::{application::create_service, domain::common::FoodbootConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::info_span;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub const WELCOME: &str = "Welcome to foodboot backend! Visit https://foodboot.netlify.app/";

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let foodboot_config = FoodbootConfig::from(args.as_ref().clone());
    let service = create_service(foodboot_config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_origin(Any)
        .allow_headers([HeaderName::from_static("x-requested-with"), CONTENT_TYPE]);

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(
            format!("{}/redoc", root_path),
            openapi.clone(),
        ))
        .merge(RapiDoc::with_openapi(api_docs_url, openapi).path(format!("{}/rapidoc", root_path)))
        .route(&format!("{}/", root_path), get(|| async { WELCOME }))
        .merge(client_routes(state.clone()))
        .merge(medical_history_routes(state.clone()))
        .merge(food_preference_routes(state.clone()))
        .merge(food_option_routes(state.clone()))
        .merge(calendar_routes(state.clone()))
        .merge(calendar_event_routes(state.clone()))
        .merge(meal_plan_routes(state.clone()))
        .merge(food_combination_routes(state.clone()))
        .merge(customer_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
