//! # Nance Gateway
//!
//! Backend-for-frontend for the Nance DAO governance app. Everything here
//! is deliberately thin: stateless proxy routes in front of third-party
//! services, a Redis-backed session token store, and a handful of pure
//! display helpers.
//!
//! ## Modules
//!
//! - [`api`]: REST API server with Axum
//! - [`discord`]: Bot command passthrough and contact-webhook relay
//! - [`auto`]: nance-auto scheduler trigger client
//! - [`snapshot`]: Snapshot hub GraphQL client (space listings)
//! - [`session`]: Redis session token store (write/delete only)
//! - [`util`]: Pure helpers (addresses, cycle dates, proposal ids)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nance_gateway::api::{serve, ApiConfig, AppState};
//! use nance_gateway::auto::AutoClient;
//! use nance_gateway::config::Config;
//! use nance_gateway::discord::DiscordClient;
//! use nance_gateway::snapshot::SnapshotClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     let state = AppState::new(
//!         Arc::new(DiscordClient::new(config.discord)),
//!         Arc::new(AutoClient::new(config.auto)),
//!         Arc::new(SnapshotClient::new(config.snapshot)),
//!         ApiConfig::default(),
//!     );
//!
//!     serve(state, &ApiConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auto;
pub mod config;
pub mod discord;
pub mod session;
pub mod snapshot;
pub mod util;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use auto::{AutoClient, AutoError};
pub use discord::{ContactMessage, DiscordClient, DiscordError, UpstreamResponse};
pub use session::{SessionError, SessionStore};
pub use snapshot::{SnapshotClient, SnapshotError, Space};

pub use config::{
    AutoConfig, Config, ConfigError, DiscordConfig, LoggingConfig, SessionConfig, SnapshotConfig,
};

pub use util::{
    date_ranges_of_cycles, etherscan_url, first_paragraph, invalidate_zero_address,
    proposal_number, shorten_address, ZERO_ADDRESS,
};
