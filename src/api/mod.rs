//! Nance Gateway REST API
//!
//! HTTP API layer for the gateway, built with Axum. Every route is a
//! stateless handler: validate at most one required field, make at most one
//! outbound call, relay the result.
//!
//! # Endpoints
//!
//! ## Discord
//! - `GET /api/v1/discord/command?command=...` - Bot command passthrough
//! - `POST /api/v1/discord/contact` - Contact-form webhook relay
//!
//! ## Session
//! - `GET /api/v1/session/init` - Mint a short-lived login token
//! - `GET /api/v1/session/logout?address=...` - Delete a store entry
//!
//! ## Automation
//! - `GET /api/v1/auto/events` - Trigger nance-auto, relay status only
//!
//! ## Spaces
//! - `GET /api/v1/snapshot/spaces` - Governance space listing
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Discord proxies
        .route("/discord/command", get(routes::discord::run_command))
        .route("/discord/contact", post(routes::discord::send_contact))
        // Session store
        .route("/session/init", get(routes::session::init))
        .route("/session/logout", get(routes::session::logout))
        // Automation trigger
        .route("/auto/events", get(routes::auto::trigger_events))
        // Space listing
        .route("/snapshot/spaces", get(routes::spaces::list_spaces));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Nance gateway listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Nance gateway shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auto::AutoClient;
    use crate::config::{AutoConfig, DiscordConfig, SnapshotConfig};
    use crate::discord::DiscordClient;
    use crate::snapshot::SnapshotClient;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    /// Local upstream answering every request with a fixed status
    async fn spawn_upstream(status: StatusCode) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(move || async move { status });
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Router with the contact webhook pointed at the given URL
    fn create_app_with_webhook(webhook: String) -> Router {
        let discord = Arc::new(DiscordClient::new(DiscordConfig {
            contact_webhook: webhook,
            ..Default::default()
        }));
        let auto = Arc::new(AutoClient::new(AutoConfig::default()));
        let snapshot = Arc::new(SnapshotClient::new(SnapshotConfig::default()));

        let state = AppState::new(discord, auto, snapshot, ApiConfig::default());
        build_router(state)
    }

    /// Router with unconfigured upstreams and no session store
    fn create_test_app() -> Router {
        let discord = Arc::new(DiscordClient::new(DiscordConfig::default()));
        let auto = Arc::new(AutoClient::new(AutoConfig::default()));
        // Nothing listens here; upstream calls fail fast instead of going
        // out to the real hub.
        let snapshot = Arc::new(SnapshotClient::new(SnapshotConfig {
            hub_url: "http://127.0.0.1:59998/graphql".to_string(),
            request_timeout_ms: 1000,
        }));

        let state = AppState::new(discord, auto, snapshot, ApiConfig::default());
        build_router(state)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_store() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_command_missing_param() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/discord/command")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_command_unconfigured_proxy() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/discord/command?command=proposals")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_contact_missing_message() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/discord/contact")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name": "jig", "email": "j@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_contact_relays_upstream_failure() {
        let webhook = spawn_upstream(StatusCode::NOT_FOUND).await;
        let app = create_app_with_webhook(webhook);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/discord/contact")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"message": "hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        // The webhook's status comes back verbatim, with the outcome body
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "failed");
        assert_eq!(body["upstream_status"], 404);
    }

    #[tokio::test]
    async fn test_contact_relays_upstream_accept() {
        let webhook = spawn_upstream(StatusCode::NO_CONTENT).await;
        let app = create_app_with_webhook(webhook);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/discord/contact")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"message": "hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_session_init_requires_wallet() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/session/init")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_session_init_without_store() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/session/init")
                    .header("x-wallet-address", "0x25910143C255828F623786f46fe9A8941B7983bB")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_logout_missing_address() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/session/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_auto_events_unconfigured() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/auto/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_spaces_unreachable_hub() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/snapshot/spaces")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
