use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /health -- liveness probe, no authentication.
async fn health_check() -> &'static str {
    "OK"
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
