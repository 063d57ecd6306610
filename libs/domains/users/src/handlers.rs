use axum::{Extension, Router, extract::State, routing::{get, post}};
use axum_helpers::{
    ApiResponse, JwtClaims, ValidatedJson,
    errors::responses::{InternalServerErrorResponse, UnauthorizedResponse, UnprocessableResponse},
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{AuthPayload, LoginRequest, RegisterRequest, User};
use crate::repository::UserRepository;
use crate::service::AuthService;

pub const TAG: &str = "Authentication";

#[derive(OpenApi)]
#[openapi(
    paths(register, login, logout, me),
    components(
        schemas(User, RegisterRequest, LoginRequest, AuthPayload),
        responses(UnprocessableResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags((name = TAG, description = "Account registration and bearer tokens"))
)]
pub struct ApiDoc;

/// `/register` and `/login`, reachable without a token.
pub fn public_router<R: UserRepository + 'static>(service: Arc<AuthService<R>>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(service)
}

/// `/logout` and `/me`; mount behind the bearer middleware so
/// [`JwtClaims`] are present.
pub fn protected_router<R: UserRepository + 'static>(service: Arc<AuthService<R>>) -> Router {
    Router::new()
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/register",
    tag = TAG,
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration successful", body = ApiResponse<AuthPayload>),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn register<R: UserRepository>(
    State(service): State<Arc<AuthService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<ApiResponse<AuthPayload>> {
    let payload = service.register(input).await?;
    Ok(ApiResponse::ok("Registration successful", payload))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthPayload>),
        (status = 401, description = "Invalid credentials", body = axum_helpers::ErrorResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn login<R: UserRepository>(
    State(service): State<Arc<AuthService<R>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<ApiResponse<AuthPayload>> {
    let payload = service.login(input).await?;
    Ok(ApiResponse::ok("Login successful", payload))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = TAG,
    responses(
        (status = 200, description = "Logged out successfully", body = ApiResponse<Vec<String>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout<R: UserRepository>(
    State(service): State<Arc<AuthService<R>>>,
    Extension(claims): Extension<JwtClaims>,
) -> UserResult<ApiResponse<Vec<Value>>> {
    service.logout(&claims).await?;
    Ok(ApiResponse::empty("Logged out successfully"))
}

#[utoipa::path(
    get,
    path = "/me",
    tag = TAG,
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<User>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn me<R: UserRepository>(
    State(service): State<Arc<AuthService<R>>>,
    Extension(claims): Extension<JwtClaims>,
) -> UserResult<ApiResponse<User>> {
    let user = service.me(&claims).await?;
    Ok(ApiResponse::ok("User retrieved successfully", user))
}
