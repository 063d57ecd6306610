//! Bearer token authentication.
//!
//! Tokens are HS256 JWTs. Each issued token's `jti` is registered in a
//! [`TokenStore`]; verification requires a valid signature, an unexpired
//! `exp` and a live store entry, so logging out revokes the token.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, InMemoryTokenStore, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?, Arc::new(InMemoryTokenStore::new()));
//! let protected = Router::new()
//!     .route("/api/brands", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod store;

pub use config::JwtConfig;
pub use jwt::{IssuedToken, JwtAuth, JwtClaims, VerifyError};
pub use middleware::{UNAUTHENTICATED, jwt_auth_middleware};
pub use store::{InMemoryTokenStore, TokenRecord, TokenStore};
