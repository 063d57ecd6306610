//! # Axum Helpers
//!
//! Shared HTTP plumbing for the shop API.
//!
//! - **[`envelope`]**: `{success, message, data}` responses and paginated pages
//! - **[`errors`]**: [`AppError`] and the failure envelope
//! - **[`extractors`]**: UUID paths, validated JSON, partial-update helpers
//! - **[`auth`]**: bearer JWTs backed by a revocable token store
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::{create_router, cors_layer, parse_allowed_origins};
//!
//! let cors = cors_layer(parse_allowed_origins(&config.cors_allowed_origin)?);
//! let router = create_router::<ApiDoc>(api_routes, cors);
//! ```

pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    InMemoryTokenStore, IssuedToken, JwtAuth, JwtClaims, JwtConfig, TokenRecord, TokenStore,
    jwt_auth_middleware,
};
pub use envelope::{ApiResponse, Paginated};
pub use errors::{AppError, ErrorCode, ErrorResponse, FieldErrors};
pub use extractors::{UuidPath, UuidPathPair, ValidatedJson, double_option};
pub use http::{cors_layer, parse_allowed_origins, security_headers};
pub use server::{
    HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};
