//! `GET /health`: liveness plus database and schema state.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and migrations have been applied,
    /// `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Latest successfully applied migration, if any.
    pub schema_version: Option<i64>,
}

/// Responds 200 when healthy and 503 when degraded, so load balancers can
/// act on the status code alone.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let schema_version = survey_db::schema_version(&state.pool).await;
    let db_healthy = schema_version.is_ok();
    let schema_version = schema_version.ok().flatten();

    let (status_code, status) = match (db_healthy, schema_version) {
        (true, Some(_)) => (StatusCode::OK, "ok"),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            schema_version,
        }),
    )
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
