//! Health check handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::db::catalog::PRODUCTS_KEY;
use crate::state::AppState;

/// Liveness check: the process is up.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness check: the document store can be read.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().get(PRODUCTS_KEY) {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "store unavailable")
        }
    }
}
