//! JSON extractor with validation through the `validator` crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes and validates a JSON body.
///
/// Both malformed JSON and rule violations answer 422; rule violations carry
/// `errors: { field: [messages] }`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateBrand {
///     #[validate(length(max = 255))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateBrand>) -> String {
///     payload.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Register {
        #[validate(length(min = 1, max = 255))]
        name: String,
        #[validate(email)]
        email: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/register",
            post(|ValidatedJson(body): ValidatedJson<Register>| async move {
                format!("{} <{}>", body.name, body.email)
            }),
        )
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/register")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let response = app()
            .oneshot(post_json(r#"{"name":"John","email":"john@example.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_lists_field_errors() {
        let response = app()
            .oneshot(post_json(r#"{"name":"John","email":"not-an-email"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation error");
        assert_eq!(
            json["errors"]["email"][0],
            "The email field must be a valid email address."
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let response = app().oneshot(post_json(r#"{"name":"John"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
