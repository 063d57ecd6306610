//! Readiness probe with a real database ping.

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use sea_orm::DatabaseConnection;

pub async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

/// `/ready`, merged next to `/health` outside the `/api` prefix.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(db)
}
