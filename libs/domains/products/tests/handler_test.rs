//! Handler tests for the Products domain, run against in-memory
//! repositories and a scratch media directory.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_brands::{Brand, BrandRepository, CreateBrand, InMemoryBrandRepository};
use domain_products::media::{self, ImageService, InMemoryMediaRepository, MediaStorage};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::path::PathBuf;
use tower::ServiceExt; // For oneshot()

const BOUNDARY: &str = "shop-test-boundary";

struct TestApp {
    router: Router,
    brands: InMemoryBrandRepository,
    media_root: PathBuf,
}

impl TestApp {
    fn new() -> Self {
        let brands = InMemoryBrandRepository::new();
        let media_root =
            std::env::temp_dir().join(format!("products-handler-{}", uuid::Uuid::now_v7()));
        let products = ProductService::new(InMemoryProductRepository::with_brands(brands.clone()));
        let images = ImageService::new(
            products.repository().clone(),
            InMemoryMediaRepository::new(),
            MediaStorage::new(&media_root, "/storage"),
        );
        let router = handlers::router(products).merge(media::handlers::image_router(images));
        Self {
            router,
            brands,
            media_root,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn create(&self, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn upload(&self, product_id: &str, file_name: &str, mime: &str, bytes: &[u8]) -> (StatusCode, Value) {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        self.send(
            Request::builder()
                .method("POST")
                .uri(format!("/{product_id}/upload-image"))
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.media_root);
    }
}

fn widget() -> Value {
    json!({ "name": "Widget", "qty": 5, "security_stock": 1 })
}

#[tokio::test]
async fn test_create_product_with_brand() {
    let app = TestApp::new();
    let brand = app
        .brands
        .insert(Brand::new(CreateBrand {
            name: Some("Acme".into()),
            slug: Some("acme".into()),
            is_visible: Some(true),
            ..Default::default()
        }))
        .await
        .unwrap();

    let mut body = widget();
    body["shop_brand_id"] = json!(brand.id);
    body["type"] = json!("deliverable");
    body["price"] = json!(9.5);
    let (status, body) = app.create(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Product created successfully");
    assert_eq!(body["data"]["brand"]["slug"], "acme");
    assert_eq!(body["data"]["type"], "deliverable");
    assert_eq!(body["data"]["featured"], false);
}

#[tokio::test]
async fn test_unknown_brand_is_field_error() {
    let app = TestApp::new();
    let mut body = widget();
    body["shop_brand_id"] = json!(uuid::Uuid::now_v7());

    let (status, body) = app.create(body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"]["shop_brand_id"][0],
        "The selected shop brand id is invalid."
    );
}

#[tokio::test]
async fn test_duplicate_sku_is_field_error() {
    let app = TestApp::new();
    let mut body = widget();
    body["sku"] = json!("W-1");

    assert_eq!(app.create(body.clone()).await.0, StatusCode::OK);
    let (status, body) = app.create(body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["errors"]["sku"][0], "The sku has already been taken.");
}

#[tokio::test]
async fn test_list_filters_by_flag_and_rejects_unknown_key() {
    let app = TestApp::new();
    let mut featured = widget();
    featured["featured"] = json!(true);
    app.create(featured).await;
    app.create(widget()).await;

    let (status, body) = app
        .send(
            Request::builder()
                .uri("/?featured=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Products retrieved successfully");
    assert_eq!(body["data"]["total"], 1);

    let (status, body) = app
        .send(Request::builder().uri("/?colour=red").body(Body::empty()).unwrap())
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Unknown filter field: colour");
}

#[tokio::test]
async fn test_second_upload_replaces_image() {
    let app = TestApp::new();
    let (_, created) = app.create(widget()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, first) = app.upload(&id, "one.png", "image/png", b"first").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "Image uploaded successfully");
    assert_eq!(first["data"]["collection_name"], "product_images");

    let (status, second) = app.upload(&id, "two.jpg", "image/jpeg", b"second").await;
    assert_eq!(status, StatusCode::OK);

    let (status, current) = app
        .send(
            Request::builder()
                .uri(format!("/{id}/image"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["data"]["id"], second["data"]["id"]);
    assert_eq!(current["data"]["mime_type"], "image/jpeg");
    let url = current["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("/storage/product_images/") && url.ends_with(".jpg"));

    let first_path = first["data"]["path"].as_str().unwrap();
    assert!(!app.media_root.join(first_path).exists());
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let app = TestApp::new();
    let (_, created) = app.create(widget()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.upload(&id, "notes.txt", "text/plain", b"hello").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["image"][0], "The image field must be an image.");
}

#[tokio::test]
async fn test_upload_to_deleted_product_is_not_found() {
    let app = TestApp::new();
    let (_, created) = app.create(widget()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product soft deleted successfully");
    assert_eq!(body["data"], json!([]));

    let (status, body) = app.upload(&id, "a.png", "image/png", b"png").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        "Product not found. The record may have been deleted."
    );
}

#[tokio::test]
async fn test_product_without_image() {
    let app = TestApp::new();
    let (_, created) = app.create(widget()).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, body) = app
        .send(
            Request::builder()
                .uri(format!("/{id}/image"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Product has no image");
}
