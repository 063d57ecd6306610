//! Configuration for the shop API

use axum_helpers::JwtConfig;
use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse, env_required,
    server::ServerConfig,
};
use database::postgres::PostgresConfig;
use std::path::PathBuf;

pub use core_config::Environment;

/// Where uploaded files live and the URL prefix they are served under.
///
/// - `MEDIA_ROOT` (default `storage/app/public`)
/// - `MEDIA_URL` (default `/storage`), must start with `/`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaConfig {
    pub root: PathBuf,
    pub url: String,
}

impl FromEnv for MediaConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_or_default("MEDIA_URL", "/storage");
        if !url.starts_with('/') || url == "/" {
            return Err(ConfigError::ParseError {
                key: "MEDIA_URL".to_string(),
                details: format!("must be an absolute path below the site root, got '{url}'"),
            });
        }
        Ok(Self {
            root: PathBuf::from(env_or_default("MEDIA_ROOT", "storage/app/public")),
            url: url.trim_end_matches('/').to_string(),
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub jwt: JwtConfig,
    pub media: MediaConfig,
    /// Comma-separated list for `CORS_ALLOWED_ORIGIN`
    pub cors_allowed_origin: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            media: MediaConfig::from_env()?,
            cors_allowed_origin: env_required("CORS_ALLOWED_ORIGIN")?,
            run_migrations: env_parse("RUN_MIGRATIONS", "true")?,
        })
    }
}
