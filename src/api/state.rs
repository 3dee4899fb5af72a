//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::auto::AutoClient;
use crate::discord::DiscordClient;
use crate::session::SessionStore;
use crate::snapshot::SnapshotClient;
use std::sync::Arc;
use std::time::Instant;

use crate::api::error::ApiError;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Discord bot passthrough + contact webhook relay
    pub discord: Arc<DiscordClient>,
    /// nance-auto trigger client
    pub auto: Arc<AutoClient>,
    /// Snapshot hub client
    pub snapshot: Arc<SnapshotClient>,
    /// Session token store (absent when no store is configured)
    pub sessions: Option<Arc<SessionStore>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState without a session store
    pub fn new(
        discord: Arc<DiscordClient>,
        auto: Arc<AutoClient>,
        snapshot: Arc<SnapshotClient>,
        config: ApiConfig,
    ) -> Self {
        Self {
            discord,
            auto,
            snapshot,
            sessions: None,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create AppState with a session store
    pub fn with_sessions(
        discord: Arc<DiscordClient>,
        auto: Arc<AutoClient>,
        snapshot: Arc<SnapshotClient>,
        config: ApiConfig,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            discord,
            auto,
            snapshot,
            sessions: Some(sessions),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// The session store, or a 503 when none is configured
    pub fn sessions(&self) -> Result<&Arc<SessionStore>, ApiError> {
        self.sessions.as_ref().ok_or_else(|| {
            ApiError::ServiceUnavailable("session store not configured".to_string())
        })
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Number of spaces fetched for the listing page
    pub spaces_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3003,
            request_timeout_ms: 30_000,
            spaces_page_size: 32,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
