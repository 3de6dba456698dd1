use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use foodboot_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use foodboot_core::{
    application::service_from_connection, infrastructure::db::schema::create_schema,
};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use test_context::AsyncTestContext;

/// The full router on top of a fresh in-memory SQLite database.
pub struct FoodbootContext {
    pub server: TestServer,
}

impl AsyncTestContext for FoodbootContext {
    async fn setup() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(options).await.unwrap();
        create_schema(&db).await.unwrap();

        let args = Args::parse_from(["foodboot", "--database-url", "sqlite::memory:"]);
        let state = AppState::new(Arc::new(args), service_from_connection(db));

        let server = TestServer::new(router(state).unwrap()).unwrap();

        Self { server }
    }
}

impl FoodbootContext {
    /// Creates a client and returns its id.
    pub async fn create_client(&self, email: &str) -> i64 {
        let response = self
            .server
            .post("/clients/create")
            .json(&client_body(email))
            .await;
        response.assert_status_ok();

        response.json::<Value>()["client"]["id"].as_i64().unwrap()
    }
}

pub fn client_body(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "dob": "1990-12-10T00:00:00Z",
        "gender": "female",
        "email": email,
        "phone": "555-0100",
        "address": "12 St James's Square",
        "food_allergies": "peanuts"
    })
}
