//! Users Domain
//!
//! Accounts and bearer-token authentication. Passwords are stored as
//! argon2 hashes; tokens are JWTs whose `jti` lives in
//! `personal_access_tokens` until logout or expiry.
//!
//! ```no_run
//! # async fn wire(db: sea_orm::DatabaseConnection) -> eyre::Result<()> {
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_users::{AuthService, PgTokenStore, PgUserRepository, handlers};
//! use std::sync::Arc;
//!
//! let jwt = JwtAuth::new(
//!     &JwtConfig::new("change-me-change-me-change-me-change-me")?,
//!     Arc::new(PgTokenStore::new(db.clone())),
//! );
//! let service = Arc::new(AuthService::new(PgUserRepository::new(db), jwt));
//! let public = handlers::public_router(service.clone());
//! let protected = handlers::protected_router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod token_store;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{AuthPayload, LoginRequest, RegisterRequest, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::AuthService;
pub use token_store::PgTokenStore;
