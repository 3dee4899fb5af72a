//! Automation Routes
//!
//! - GET /api/v1/auto/events - trigger the nance-auto events run
//!
//! The bearer key stays server-side; the caller only ever sees the status
//! code the automation service answered with.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/auto/events
///
/// Forwards to nance-auto and relays only its status code, with an empty
/// body.
pub async fn trigger_events(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let upstream_status = state.auto.trigger_events().await?;

    tracing::info!(status = upstream_status, "nance-auto events triggered");

    let status = StatusCode::from_u16(upstream_status)
        .map_err(|_| ApiError::Internal(format!("Bad upstream status {upstream_status}")))?;

    Ok(status.into_response())
}
