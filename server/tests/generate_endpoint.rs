//! Endpoint tests driving the router directly, with a fake AI client.

use axum::body::{self, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use chefmate_core::{
    ChatRequest, FakeAiClient, HttpRelay, MealPlanner, Role, CATALOG, NO_SCRIPT_FALLBACK,
};
use chefmate_server::app;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn post_json(client: FakeAiClient, body: &str) -> Response {
    app(Arc::new(client))
        .oneshot(
            Request::post("/api/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_returns_script() {
    let response = post_json(FakeAiClient::always("X"), r#"{"prompt": "test"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(json_body(response).await, json!({ "script": "X" }));
}

#[tokio::test]
async fn test_generate_without_content_uses_fallback() {
    let response = post_json(FakeAiClient::empty(), r#"{"prompt": "test"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "script": NO_SCRIPT_FALLBACK })
    );
}

#[tokio::test]
async fn test_generate_provider_failure_is_server_error() {
    let response = post_json(FakeAiClient::failing("network down"), r#"{"prompt": "test"}"#).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("network down"));
    assert!(body.get("script").is_none());
}

#[tokio::test]
async fn test_generate_rejects_malformed_bodies() {
    for body in [r#"{"nope": 1}"#, "not json", r#"{"prompt": 42}"#] {
        let response = post_json(FakeAiClient::always("X"), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(json_body(response).await["error"].is_string());
    }
}

#[tokio::test]
async fn test_generate_rejects_missing_content_type() {
    let response = app(Arc::new(FakeAiClient::always("X")))
        .oneshot(
            Request::post("/api/generate")
                .body(Body::from(r#"{"prompt": "test"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_forwards_prompt_once() {
    let client = Arc::new(FakeAiClient::always("1. Cook."));
    let response = app(client.clone())
        .oneshot(
            Request::post("/api/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"prompt": "Create a meal plan"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let requests: Vec<ChatRequest> = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages[0].role, Role::System);
    assert_eq!(requests[0].messages[1].content, "Create a meal plan");
}

#[tokio::test]
async fn test_catalog_lists_items() {
    let response = app(Arc::new(FakeAiClient::new()))
        .oneshot(Request::get("/api/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let items: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(items, CATALOG.to_vec());
}

#[tokio::test]
async fn test_planner_against_running_server() {
    let client = Arc::new(FakeAiClient::always(
        "1. Grill the chicken.\n2. Boil the eggs.\n\n**Calories:** 520",
    ));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(client.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let relay = HttpRelay::new(format!("http://{}", addr));
    let mut planner = MealPlanner::new();
    planner.toggle("Chicken");
    planner.set_quantity("Chicken", "200g");
    planner.toggle("Eggs");

    let result = planner.submit(&relay).await.unwrap();
    let cards = result.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].body, "Grill the chicken.");
    assert_eq!(result.narrative().trim(), "**Calories:** 520");

    let prompt = &client.requests()[0].messages[1].content;
    assert!(prompt.contains("Chicken (200g)"));
    assert!(prompt.contains("Eggs (default amount)"));
}
