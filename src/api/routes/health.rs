//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Checks the session store when one is configured; the proxy routes have
/// no connection to hold open, so nothing else is probed.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_session_store(&state).await {
        Some(false) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = check_session_store(&state).await;

    let (overall, store_status) = match store {
        None => ("healthy", "disabled"),
        Some(true) => ("healthy", "ok"),
        Some(false) => ("degraded", "error"),
    };

    Json(HealthResponse {
        status: overall.to_string(),
        session_store: store_status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Ping the session store; None when no store is configured
async fn check_session_store(state: &AppState) -> Option<bool> {
    let store = state.sessions.as_ref()?;
    Some(store.ping().await.is_ok())
}
