//! Session Routes
//!
//! - GET /api/v1/session/init - mint a short-lived login token
//! - GET /api/v1/session/logout - delete a store entry
//!
//! `init` writes a token-keyed entry while `logout` deletes an
//! address-keyed one; see the session module docs for why that asymmetry
//! is preserved.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{LogoutQuery, SessionInitResponse, StatusResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Header carrying the authenticated wallet address, set by the auth layer
pub const WALLET_HEADER: &str = "x-wallet-address";

/// GET /api/v1/session/init
///
/// Requires an authenticated wallet address on the request. Mints a uuid
/// token, stores token -> address with the configured expiry and returns
/// the token to the caller.
pub async fn init(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionInitResponse>> {
    let address = headers
        .get(WALLET_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::Unauthorized("no authenticated wallet session"))?;

    let sessions = state.sessions()?;

    let token = uuid::Uuid::new_v4().to_string();
    sessions.put(&token, address).await?;

    tracing::debug!(address = %crate::util::shorten_address(address), "Session token minted");

    Ok(Json(SessionInitResponse {
        token,
        expires_in: sessions.token_ttl_secs(),
    }))
}

/// GET /api/v1/session/logout?address=...
///
/// Deletes the store entry keyed by wallet address.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogoutQuery>,
) -> ApiResult<Json<StatusResponse>> {
    let address = query
        .address
        .filter(|a| !a.is_empty())
        .ok_or(ApiError::MissingParam("address"))?;

    let sessions = state.sessions()?;
    sessions.remove(&address).await?;

    Ok(Json(StatusResponse {
        status: "ok".to_string(),
    }))
}
