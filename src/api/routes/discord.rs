//! Discord Routes
//!
//! - GET /api/v1/discord/command - bot command passthrough
//! - POST /api/v1/discord/contact - contact-form webhook relay
//!
//! Validation is intentionally minimal: one required field per route. The
//! upstream response is relayed as-is, with no retry and no schema check of
//! the upstream payload.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CommandQuery, ContactRequest, RelayResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::discord::ContactMessage;

/// GET /api/v1/discord/command?command=...
///
/// Runs a bot command through the Discord proxy and relays the upstream
/// status code and JSON body verbatim.
pub async fn run_command(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CommandQuery>,
) -> ApiResult<Response> {
    let command = query
        .command
        .filter(|c| !c.is_empty())
        .ok_or(ApiError::MissingParam("command"))?;

    let upstream = state.discord.run_command(&command).await?;

    tracing::debug!(command = %command, status = upstream.status, "Relayed bot command");

    let status = StatusCode::from_u16(upstream.status)
        .map_err(|_| ApiError::Internal(format!("Bad upstream status {}", upstream.status)))?;

    Ok((status, Json(upstream.body)).into_response())
}

/// POST /api/v1/discord/contact
///
/// Relays a contact-form submission to the configured webhook. Only the
/// message field is required. The webhook's status code becomes the
/// response status; Discord answers 204 on success.
pub async fn send_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> ApiResult<Response> {
    if req.message.trim().is_empty() {
        return Err(ApiError::MissingParam("message"));
    }

    let msg = ContactMessage {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    let upstream_status = state.discord.send_contact(&msg).await?;

    let status = StatusCode::from_u16(upstream_status)
        .map_err(|_| ApiError::Internal(format!("Bad upstream status {upstream_status}")))?;

    // 204 carries no body
    if status == StatusCode::NO_CONTENT {
        return Ok(status.into_response());
    }

    let outcome = if status.is_success() { "ok" } else { "failed" };

    Ok((
        status,
        Json(RelayResponse {
            status: outcome.to_string(),
            upstream_status,
        }),
    )
        .into_response())
}
