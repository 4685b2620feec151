//! Root-level service health endpoint.
//!
//! Mounted outside `/api/v1` so monitoring can hit it without going through
//! the versioned API surface.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// Version of this crate.
    pub version: &'static str,
    /// Result of the database reachability check.
    pub db_healthy: bool,
}

/// Report whether the service and its database are up.
///
/// Always returns 200; a broken database shows up as `degraded` in the body
/// rather than as an error status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = roster_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
