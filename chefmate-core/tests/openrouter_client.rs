//! Tests for the OpenAI-compatible client against a local stub provider.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use chefmate_core::ai::{
    generate_meal_plan, AiClient, AiConfig, AiError, ChatMessage, ChatRequest, OpenRouterClient,
    NO_SCRIPT_FALLBACK,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the stub saw: authorization header and request body of the last call.
type Captured = Arc<Mutex<Option<(Option<String>, Value)>>>;

#[derive(Clone, Default)]
struct StubState {
    captured: Captured,
    hits: Arc<AtomicUsize>,
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A stub `/chat/completions` that always answers with `status` and `body`.
async fn stub_provider(status: StatusCode, body: Value) -> (String, StubState) {
    let state = StubState::default();
    let router = Router::new()
        .route(
            "/chat/completions",
            post(
                move |State(state): State<StubState>,
                      headers: HeaderMap,
                      Json(request): Json<Value>| {
                    let body = body.clone();
                    async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        state.hits.fetch_add(1, Ordering::SeqCst);
                        *state.captured.lock().unwrap() = Some((auth, request));
                        (status, Json(body))
                    }
                },
            ),
        )
        .with_state(state.clone());

    (spawn(router).await, state)
}

fn client_for(base_url: &str) -> OpenRouterClient {
    OpenRouterClient::new(
        AiConfig::new("test-key")
            .with_model("test/model")
            .with_base_url(base_url),
    )
}

fn envelope(choices: Value) -> Value {
    json!({
        "id": "gen-1",
        "object": "chat.completion",
        "created": 0,
        "model": "test/model",
        "choices": choices,
        "usage": {"prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46}
    })
}

fn completion(content: Value) -> Value {
    envelope(json!([{
        "index": 0,
        "message": {"role": "assistant", "content": content},
        "finish_reason": "stop"
    }]))
}

#[tokio::test]
async fn test_sends_meal_plan_request_and_trims_reply() {
    let (base_url, stub) =
        stub_provider(StatusCode::OK, completion(json!("  1. Grill chicken.\n  "))).await;
    let client = client_for(&base_url);

    let script = generate_meal_plan(&client, "Create a meal plan using only the: Chicken (200g)")
        .await
        .unwrap();
    assert_eq!(script, "1. Grill chicken.");

    let (auth, body) = stub.captured.lock().unwrap().take().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(body["model"], "test/model");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(
        body["messages"][1]["content"],
        "Create a meal plan using only the: Chicken (200g)"
    );
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(body["top_p"].as_f64(), Some(1.0));
    assert_eq!(body["frequency_penalty"].as_f64(), Some(0.0));
    assert_eq!(body["presence_penalty"].as_f64(), Some(0.0));
    assert_eq!(body["n"], 1);
}

#[tokio::test]
async fn test_usage_is_reported() {
    let (base_url, _) = stub_provider(StatusCode::OK, completion(json!("X"))).await;
    let client = client_for(&base_url);

    let response = client
        .complete(
            "test",
            ChatRequest {
                messages: vec![ChatMessage::user("hi")],
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(response.content.as_deref(), Some("X"));
    assert_eq!(response.usage.total_tokens, 46);
}

#[tokio::test]
async fn test_no_choices_falls_back() {
    let (base_url, _) = stub_provider(StatusCode::OK, envelope(json!([]))).await;
    let script = generate_meal_plan(&client_for(&base_url), "test")
        .await
        .unwrap();
    assert_eq!(script, NO_SCRIPT_FALLBACK);
}

#[tokio::test]
async fn test_null_content_falls_back() {
    let (base_url, _) = stub_provider(StatusCode::OK, completion(Value::Null)).await;
    let script = generate_meal_plan(&client_for(&base_url), "test")
        .await
        .unwrap();
    assert_eq!(script, NO_SCRIPT_FALLBACK);
}

#[tokio::test]
async fn test_server_error_is_an_error_without_retry() {
    let (base_url, stub) = stub_provider(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": {"message": "upstream down", "type": "server_error"}}),
    )
    .await;

    let err = generate_meal_plan(&client_for(&base_url), "test")
        .await
        .unwrap_err();
    match err {
        AiError::Api(message) => assert_eq!(message, "upstream down"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rate_limit_is_an_error_without_retry() {
    let (base_url, stub) = stub_provider(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "Rate limit exceeded", "type": "rate_limit"}}),
    )
    .await;

    let err = generate_meal_plan(&client_for(&base_url), "test")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Api(ref message) if message == "Rate limit exceeded"));
    assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_bad_request_is_an_error() {
    let (base_url, _) = stub_provider(
        StatusCode::BAD_REQUEST,
        json!({"error": {"message": "unknown model"}}),
    )
    .await;

    let err = generate_meal_plan(&client_for(&base_url), "test")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Api(ref message) if message == "unknown model"));
}

#[tokio::test]
async fn test_error_in_success_body_is_an_error() {
    let (base_url, _) = stub_provider(
        StatusCode::OK,
        json!({"error": {"message": "Rate limit exceeded"}}),
    )
    .await;

    let err = generate_meal_plan(&client_for(&base_url), "test")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let (base_url, _) = stub_provider(StatusCode::OK, envelope(json!("nope"))).await;

    let err = generate_meal_plan(&client_for(&base_url), "test")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_an_error() {
    // Grab a free port, then close it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = generate_meal_plan(&client_for(&format!("http://{}", addr)), "test")
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::RequestFailed(_)));
}
