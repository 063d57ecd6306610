//! Handler tests for the auth routes, run against in-memory storage.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn_with_state;
use axum_helpers::{InMemoryTokenStore, JwtAuth, JwtConfig, jwt_auth_middleware};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let config = JwtConfig::new("this-is-a-valid-secret-with-32-chars!").unwrap();
    let jwt = JwtAuth::new(&config, Arc::new(InMemoryTokenStore::new()));
    let service = Arc::new(AuthService::new(InMemoryUserRepository::new(), jwt.clone()));

    let protected = handlers::protected_router(service.clone())
        .layer(from_fn_with_state(jwt, jwt_auth_middleware));
    handlers::public_router(service).merge(protected)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn john() -> Value {
    json!({ "name": "John Doe", "email": "john@example.com", "password": "secret123" })
}

#[tokio::test]
async fn test_register_then_bad_login() {
    let app = app();

    let (status, body) = send(&app, "POST", "/register", None, Some(john())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["data"]["user"]["name"], "John Doe");
    assert_eq!(body["data"]["user"]["email"], "john@example.com");
    assert!(body["data"]["user"].get("password_hash").is_none());
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({ "email": "john@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "success": false, "message": "Invalid credentials" }));
}

#[tokio::test]
async fn test_login_me_logout() {
    let app = app();
    send(&app, "POST", "/register", None, Some(john())).await;

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({ "email": "john@example.com", "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", "/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User retrieved successfully");
    assert_eq!(body["data"]["email"], "john@example.com");

    let (status, body) = send(&app, "POST", "/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out successfully");
    assert_eq!(body["data"], json!([]));

    let (status, body) = send(&app, "GET", "/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthenticated");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = app();

    let (status, body) = send(&app, "POST", "/register", None, Some(json!({}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["errors"]["name"][0], "The name field is required.");
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
async fn test_register_taken_email() {
    let app = app();
    send(&app, "POST", "/register", None, Some(john())).await;

    let (status, body) = send(&app, "POST", "/register", None, Some(john())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
}

#[tokio::test]
async fn test_me_without_token() {
    let (status, body) = send(&app(), "GET", "/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "success": false, "message": "Unauthenticated" }));
}
