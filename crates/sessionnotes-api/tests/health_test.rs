//! Liveness and info endpoint tests.
//!
//! Run with: `cargo test -p sessionnotes-api --test health_test`

mod helpers;

use chrono::DateTime;
use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn test_health_returns_ok_and_timestamp() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().expect("timestamp must be a string");
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn test_health_ignores_upload_dir_state() {
    let app = setup_test_app().await;
    std::fs::remove_dir_all(app.upload_dir()).unwrap();

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_api_root_identifies_service() {
    let app = setup_test_app().await;

    let response = app.client().get("/api").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Session Notes API");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/health")
        .add_header("X-Request-ID", "req-123")
        .await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-123");

    let response = app.client().get("/health").await;
    let generated = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert!(body["paths"]["/uploads"].is_object());
    assert!(body["paths"]["/uploads/memory"].is_object());
}
