use super::jwt::{JwtAuth, VerifyError};
use crate::errors::ErrorResponse;
use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

pub const UNAUTHENTICATED: &str = "Unauthenticated";

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(UNAUTHENTICATED)),
    )
        .into_response()
}

/// Bearer token guard.
///
/// Rejects with 401 `{"success":false,"message":"Unauthenticated"}` and
/// never redirects. On success the [`JwtClaims`](super::JwtClaims) are
/// inserted into the request extensions.
///
/// ```ignore
/// let protected = Router::new()
///     .route("/brands", get(list_brands))
///     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(Authorization(bearer)) = request.headers().typed_get::<Authorization<Bearer>>()
    else {
        tracing::debug!("No bearer token in Authorization header");
        return unauthenticated();
    };

    match auth.verify(bearer.token()).await {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(VerifyError::Store(e)) => {
            tracing::error!("Token store error: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("Service temporarily unavailable")),
            )
                .into_response()
        }
        Err(e) => {
            tracing::debug!("Bearer token rejected: {}", e);
            unauthenticated()
        }
    }
}
