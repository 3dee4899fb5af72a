//! nance-auto Client
//!
//! Forwards trigger requests to the external nance-auto scheduler service.
//! Only the upstream status code is relayed; the body is discarded.

use reqwest::Client;
use thiserror::Error;

use crate::config::AutoConfig;

/// Client for the nance-auto scheduler service
pub struct AutoClient {
    client: Client,
    config: AutoConfig,
}

impl AutoClient {
    /// Create a new client with the given configuration
    pub fn new(config: AutoConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &AutoConfig {
        &self.config
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.config.base_url.trim_end_matches('/'))
    }

    /// Trigger the automation events run, returning the upstream status code
    pub async fn trigger_events(&self) -> Result<u16, AutoError> {
        if self.config.key.is_empty() {
            return Err(AutoError::NotConfigured("auto.key"));
        }

        let response = self
            .client
            .get(self.events_url())
            .bearer_auth(&self.config.key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AutoError::Timeout
                } else if e.is_connect() {
                    AutoError::Unavailable
                } else {
                    AutoError::Request(e)
                }
            })?;

        Ok(response.status().as_u16())
    }
}

/// Errors that can occur when talking to nance-auto
#[derive(Error, Debug)]
pub enum AutoError {
    #[error("nance-auto unreachable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Missing configuration: {0}")]
    NotConfigured(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url_trims_trailing_slash() {
        let client = AutoClient::new(AutoConfig {
            base_url: "http://auto.internal/".to_string(),
            key: "k".to_string(),
            ..Default::default()
        });
        assert_eq!(client.events_url(), "http://auto.internal/events");
    }

    #[tokio::test]
    async fn test_trigger_requires_key() {
        let client = AutoClient::new(AutoConfig::default());
        let err = client.trigger_events().await.unwrap_err();
        assert!(matches!(err, AutoError::NotConfigured("auto.key")));
    }

    #[tokio::test]
    async fn test_trigger_unreachable_upstream() {
        // Nothing listens on this port; the transport failure must surface
        // as Unavailable rather than a relayed status.
        let client = AutoClient::new(AutoConfig {
            base_url: "http://127.0.0.1:59999".to_string(),
            key: "k".to_string(),
            request_timeout_ms: 1000,
        });
        let err = client.trigger_events().await.unwrap_err();
        assert!(matches!(err, AutoError::Unavailable | AutoError::Timeout));
    }
}
