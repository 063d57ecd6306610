//! JWT settings loaded through `core_config`.

use core_config::{ConfigError, FromEnv, env_parse, env_required};

pub const MIN_SECRET_LEN: usize = 32;

/// One day.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `JWT_TTL_SECONDS` (default 86400) - lifetime of issued tokens
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        check_secret(&secret)?;
        Ok(Self {
            secret,
            ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        })
    }

    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                secret.len()
            ),
        });
    }
    Ok(())
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        check_secret(&secret)?;
        let ttl_seconds: i64 = env_parse("JWT_TTL_SECONDS", "86400")?;
        if ttl_seconds <= 0 {
            return Err(ConfigError::ParseError {
                key: "JWT_TTL_SECONDS".to_string(),
                details: "must be positive".to_string(),
            });
        }
        Ok(Self {
            secret,
            ttl_seconds,
        })
    }
}
