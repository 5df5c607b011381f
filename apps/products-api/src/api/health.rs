//! Readiness endpoint

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::ServiceUnavailableResponse, run_health_checks, AppError, HealthCheckFuture,
};
use serde_json::Value;

use crate::state::AppState;

/// Readiness: PostgreSQL answers `SELECT 1`
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Dependencies reachable", body = Object,
            example = json!({"status": "ready", "postgres": "connected"})),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn ready(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let postgres: HealthCheckFuture<'_> = Box::pin(async {
        database::postgres::check_health(&state.db)
            .await
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![("postgres", postgres)]).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
