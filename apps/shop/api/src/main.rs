//! Shop API - e-commerce back-office REST server

use axum_helpers::server::{create_production_app, health_router};
use axum_helpers::{JwtAuth, cors_layer, parse_allowed_origins};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::PgTokenStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;
    }

    tokio::fs::create_dir_all(&config.media.root).await?;

    let jwt = JwtAuth::new(&config.jwt, Arc::new(PgTokenStore::new(db.clone())));
    let state = AppState { config, db, jwt };

    let cors = cors_layer(parse_allowed_origins(&state.config.cors_allowed_origin)?);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state), cors);

    // - /health: liveness with app name/version
    // - /ready: database ping
    // - MEDIA_URL: uploaded files
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::ready_router(state.db.clone()))
        .nest_service(
            &state.config.media.url,
            ServeDir::new(&state.config.media.root),
        );

    info!(
        media_root = %state.config.media.root.display(),
        media_url = %state.config.media.url,
        "Starting shop API"
    );

    let db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(()) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop API shutdown complete");
    Ok(())
}
