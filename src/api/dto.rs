//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::snapshot::Space;

// ============================================
// DISCORD DTOs
// ============================================

/// Query string for the bot command passthrough
#[derive(Debug, Deserialize)]
pub struct CommandQuery {
    /// Bot command to run; required
    #[serde(default)]
    pub command: Option<String>,
}

/// Contact-form submission body
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Message text; required non-empty
    #[serde(default)]
    pub message: String,
}

/// Relay response for routes that only report the upstream status
#[derive(Debug, Serialize)]
pub struct RelayResponse {
    /// "ok" when the upstream accepted the request
    pub status: String,
    /// Status code the upstream answered with
    pub upstream_status: u16,
}

// ============================================
// SESSION DTOs
// ============================================

/// Response for session initialization
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionInitResponse {
    /// Short-lived CSRF-style token mapped to the wallet address
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Query string for logout
#[derive(Debug, Deserialize)]
pub struct LogoutQuery {
    /// Wallet address whose store entry is deleted; required
    #[serde(default)]
    pub address: Option<String>,
}

/// Generic status body
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

// ============================================
// SPACES DTOs
// ============================================

/// Space listing response
#[derive(Debug, Serialize)]
pub struct SpaceListResponse {
    pub total: usize,
    pub spaces: Vec<Space>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy", "degraded" or "unhealthy"
    pub status: String,
    /// Session store status: "ok", "error" or "disabled"
    pub session_store: String,
    pub uptime_seconds: u64,
    pub version: String,
}
