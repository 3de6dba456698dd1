mod common;

use axum::http::StatusCode;
use common::{FoodbootContext, client_body};
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(FoodbootContext)]
#[tokio::test]
async fn created_client_reads_back_unchanged(ctx: &mut FoodbootContext) {
    let response = ctx
        .server
        .post("/clients/create")
        .json(&client_body("ada@example.com"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Client added!");

    let id = body["client"]["id"].as_i64().unwrap();
    let fetched = ctx.server.get(&format!("/clients/{id}")).await;

    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), body["client"]);
    assert_eq!(fetched.json::<Value>()["dob"], "1990-12-10T00:00:00Z");
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn missing_field_is_rejected(ctx: &mut FoodbootContext) {
    let mut body = client_body("ada@example.com");
    body.as_object_mut().unwrap().remove("phone");

    let response = ctx.server.post("/clients/create").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Bad request - All fields must be completed!"})
    );

    let clients = ctx.server.get("/clients").await.json::<Vec<Value>>();
    assert!(clients.is_empty());
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn malformed_body_is_rejected(ctx: &mut FoodbootContext) {
    let response = ctx
        .server
        .post("/clients/create")
        .text("{\"first_name\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn duplicate_email_conflicts(ctx: &mut FoodbootContext) {
    ctx.create_client("ada@example.com").await;

    let response = ctx
        .server
        .post("/clients/create")
        .json(&client_body("ada@example.com"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "Client with this email already exists!"
    );

    let counted = ctx.server.get("/clients/count").await.json::<Value>();
    assert_eq!(counted["count"], 1);
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn get_client_answers_422_404_and_200(ctx: &mut FoodbootContext) {
    let id = ctx.create_client("ada@example.com").await;

    ctx.server
        .get("/clients/abc")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let missing = ctx.server.get("/clients/999").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        missing.json::<Value>()["error"],
        "Client not found for id: 999!"
    );

    ctx.server
        .get("/clients/99999999999")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    ctx.server
        .get(&format!("/clients/{id}"))
        .await
        .assert_status_ok();
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn lookup_by_email(ctx: &mut FoodbootContext) {
    ctx.create_client("ada@example.com").await;

    let found = ctx.server.get("/client/ada@example.com").await;
    found.assert_status_ok();
    assert_eq!(found.json::<Value>()["last_name"], "Lovelace");

    ctx.server
        .get("/client/nobody@example.com")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn empty_values_keep_stored_fields(ctx: &mut FoodbootContext) {
    let id = ctx.create_client("ada@example.com").await;

    let response = ctx
        .server
        .put(&format!("/clients/update/{id}"))
        .json(&json!({"first_name": "", "phone": "555-0199"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Client updated!");
    assert_eq!(body["client"]["first_name"], "Ada");
    assert_eq!(body["client"]["phone"], "555-0199");
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn ordered_listing_sorts_by_last_name(ctx: &mut FoodbootContext) {
    let mut turing = client_body("alan@example.com");
    turing["first_name"] = json!("Alan");
    turing["last_name"] = json!("Turing");
    ctx.server
        .post("/clients/create")
        .json(&turing)
        .await
        .assert_status_ok();
    ctx.create_client("ada@example.com").await;

    let clients = ctx.server.get("/clients/order").await.json::<Vec<Value>>();
    let last_names: Vec<&str> = clients
        .iter()
        .map(|c| c["last_name"].as_str().unwrap())
        .collect();
    assert_eq!(last_names, vec!["Lovelace", "Turing"]);

    let descending = ctx
        .server
        .get("/clients")
        .add_query_param("sort", "-last_name")
        .add_query_param("limit", "1")
        .await
        .json::<Vec<Value>>();
    assert_eq!(descending.len(), 1);
    assert_eq!(descending[0]["last_name"], "Turing");
}

#[test_context(FoodbootContext)]
#[tokio::test]
async fn deleting_twice_answers_200_then_404(ctx: &mut FoodbootContext) {
    let id = ctx.create_client("ada@example.com").await;

    let first = ctx.server.delete(&format!("/clients/delete/{id}")).await;
    first.assert_status_ok();
    let body = first.json::<Value>();
    assert_eq!(body["message"], "Client deleted!");
    assert_eq!(body["client"]["email"], "ada@example.com");

    ctx.server
        .delete(&format!("/clients/delete/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
