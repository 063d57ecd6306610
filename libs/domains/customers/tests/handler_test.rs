//! Handler tests for the Customers domain, run against the in-memory
//! repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_customers::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(CustomerService::new(InMemoryCustomerRepository::new()))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_and_list_customers() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post(
            "/",
            json!({
                "name": "Jane Roe",
                "email": "jane@example.com",
                "gender": "female",
                "birthday": "1990-05-17"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Customer created successfully");
    assert_eq!(body["data"]["gender"], "female");
    assert_eq!(body["data"]["birthday"], "1990-05-17");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?birthday=1990-05&gender=fem")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Customers retrieved successfully");
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["per_page"], 10);
}

#[tokio::test]
async fn test_create_customer_requires_fields() {
    let response = app().oneshot(post("/", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation error");
    for field in ["name", "email", "gender"] {
        assert!(body["errors"][field].is_array(), "missing error for {field}");
    }
}

#[tokio::test]
async fn test_duplicate_email_is_422() {
    let app = app();
    let payload = json!({ "name": "Jane", "email": "jane@example.com", "gender": "female" });

    let first = app.clone().oneshot(post("/", payload.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(post("/", payload)).await.unwrap();
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(second.into_body()).await;
    assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
}

#[tokio::test]
async fn test_update_unknown_customer_is_422() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", uuid::Uuid::now_v7()))
                .header("content-type", "application/json")
                .body(Body::from(json!({ "name": "Nobody" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "Customer not found. The record may have been deleted."
    );
}
