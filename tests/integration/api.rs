// Integration tests for the API using real HTTP requests through the router

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use medibot::api::create_router;
use medibot::store::{JsonUserStore, UserStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::common::{create_test_app_state, MemoryUserStore};

fn test_router() -> Router {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
    create_router(create_test_app_state(users))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_signup_succeeds_with_ok_envelope() {
    let app = test_router();

    let response = app
        .oneshot(post_json(
            "/api/signup",
            json!({"email": "ana@example.com", "username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Signup successful! You can now login.");
}

#[tokio::test]
async fn test_signup_with_blank_fields_returns_400() {
    let app = test_router();

    let response = app
        .oneshot(post_json(
            "/api/signup",
            json!({"email": "", "username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Please fill email, username and password.");
}

#[tokio::test]
async fn test_duplicate_signup_returns_409() {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
    let app = create_router(create_test_app_state(users));

    let first = app
        .clone()
        .oneshot(post_json(
            "/api/signup",
            json!({"email": "ana@example.com", "username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json(
            "/api/signup",
            json!({"email": "fresh@example.com", "username": "ana", "password": "other"}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Username already taken. Choose another one.");
}

#[tokio::test]
async fn test_login_returns_user_and_never_the_digest() {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
    let app = create_router(create_test_app_state(users));

    app.clone()
        .oneshot(post_json(
            "/api/signup",
            json!({"email": "Ana@Example.com", "username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/api/login",
            json!({"username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Login successful.");
    assert_eq!(body["user"]["username"], "ana");
    assert_eq!(body["user"]["email"], "ana@example.com");

    // Neither the plaintext nor the digest may appear anywhere in the payload.
    let raw = body.to_string();
    assert!(!raw.contains("hunter2"));
    assert!(!raw.contains("password_hash"));
}

#[tokio::test]
async fn test_login_failures_share_status_and_message() {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
    let app = create_router(create_test_app_state(users));

    app.clone()
        .oneshot(post_json(
            "/api/signup",
            json!({"email": "ana@example.com", "username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    let wrong_password = app
        .clone()
        .oneshot(post_json(
            "/api/login",
            json!({"username": "ana", "password": "wrong"}),
        ))
        .await
        .unwrap();
    let unknown_user = app
        .oneshot(post_json(
            "/api/login",
            json!({"username": "nobody", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_body = body_json(wrong_password).await;
    let unknown_body = body_json(unknown_user).await;
    assert_eq!(wrong_body["message"], "Invalid username or password.");
    assert_eq!(wrong_body["message"], unknown_body["message"]);
}

#[tokio::test]
async fn test_check_symptoms_returns_matches_without_keywords() {
    let app = test_router();

    let response = app
        .oneshot(post_json(
            "/api/check-symptoms",
            json!({"symptoms": "I have a fever and headache"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(
        body["message"],
        "General educational information only. Not a real diagnosis."
    );

    let results = body["results"].as_array().unwrap();
    assert!(results.iter().any(|r| r["name"] == "Flu"));
    for result in results {
        assert!(result.get("keywords").is_none());
        assert!(result.get("description").is_some());
        assert!(result.get("medication").is_some());
        assert!(result.get("care").is_some());
    }
}

#[tokio::test]
async fn test_check_symptoms_no_match_is_ok_with_empty_results() {
    let app = test_router();

    let response = app
        .oneshot(post_json("/api/check-symptoms", json!({"symptoms": "xyz"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_check_symptoms_blank_input_returns_400() {
    let app = test_router();

    let response = app
        .oneshot(post_json("/api/check-symptoms", json!({"symptoms": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Please enter symptoms.");
}

#[tokio::test]
async fn test_health_reports_store_sizes() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["corpus_conditions"], 3);
    assert_eq!(body["registered_users"], 0);
}

#[tokio::test]
async fn test_signup_persists_across_store_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");

    // First process lifetime: register through the full HTTP stack.
    let users: Arc<dyn UserStore> = Arc::new(JsonUserStore::load(&path));
    let app = create_router(create_test_app_state(users));
    let response = app
        .oneshot(post_json(
            "/api/signup",
            json!({"email": "ana@example.com", "username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Second process lifetime: a fresh store over the same file.
    let users: Arc<dyn UserStore> = Arc::new(JsonUserStore::load(&path));
    let app = create_router(create_test_app_state(users));
    let response = app
        .oneshot(post_json(
            "/api/login",
            json!({"username": "ana", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "ana@example.com");
}
