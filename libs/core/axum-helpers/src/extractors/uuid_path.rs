//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// A single `{id}` path segment parsed as a UUID.
///
/// Malformed ids answer 422 like any other unknown record would.
///
/// ```ignore
/// async fn show(UuidPath(id): UuidPath) -> String {
///     format!("Brand ID: {id}")
/// }
///
/// let app = Router::new().route("/brands/{id}", get(show));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Uuid::parse_str(&id)
            .map(UuidPath)
            .map_err(|_| AppError::InvalidUuid(id).into_response())
    }
}

/// Two path segments, e.g. `/products/{product_id}/variations/{id}`.
pub struct UuidPathPair(pub Uuid, pub Uuid);

impl<S> FromRequestParts<S> for UuidPathPair
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((first, second)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        let parse = |raw: String| Uuid::parse_str(&raw).map_err(|_| AppError::InvalidUuid(raw));
        let first = parse(first).map_err(IntoResponse::into_response)?;
        let second = parse(second).map_err(IntoResponse::into_response)?;
        Ok(UuidPathPair(first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/brands/{id}", get(|UuidPath(id): UuidPath| async move { id.to_string() }))
            .route(
                "/products/{product_id}/variations/{id}",
                get(|UuidPathPair(p, v): UuidPathPair| async move { format!("{p}/{v}") }),
            )
    }

    #[tokio::test]
    async fn test_valid_uuid() {
        let id = Uuid::now_v7();
        let response = app()
            .oneshot(
                Request::get(format!("/brands/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_uuid_is_unprocessable() {
        let response = app()
            .oneshot(Request::get("/brands/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_pair_rejects_bad_second_segment() {
        let response = app()
            .oneshot(
                Request::get(format!("/products/{}/variations/x", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
