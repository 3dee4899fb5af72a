//! Spaces Routes
//!
//! - GET /api/v1/snapshot/spaces - governance space listing for the UI

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SpaceListResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/snapshot/spaces
///
/// Fetches the space listing from the Snapshot hub and passes the records
/// through untransformed.
pub async fn list_spaces(State(state): State<Arc<AppState>>) -> ApiResult<Json<SpaceListResponse>> {
    let spaces = state
        .snapshot
        .list_spaces(state.config.spaces_page_size)
        .await?;

    Ok(Json(SpaceListResponse {
        total: spaces.len(),
        spaces,
    }))
}
