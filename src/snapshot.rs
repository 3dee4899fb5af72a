//! Snapshot GraphQL Client
//!
//! Fetches governance space listings from the Snapshot hub. One fixed query,
//! POSTed as `{query, variables}`, deserialized with serde. The hub data is
//! passed through to the view layer untransformed.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SnapshotConfig;

pub const SPACES_QUERY: &str = r#"
    query Spaces($first: Int!) {
        spaces(first: $first, orderBy: "created", orderDirection: desc) {
            id
            name
            about
            network
            members
            followersCount
        }
    }
"#;

/// Snapshot hub GraphQL client
pub struct SnapshotClient {
    client: Client,
    config: SnapshotConfig,
}

impl SnapshotClient {
    /// Create a new client with the given configuration
    pub fn new(config: SnapshotConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Fetch up to `first` spaces from the hub
    pub async fn list_spaces(&self, first: u32) -> Result<Vec<Space>, SnapshotError> {
        let body = GraphQlRequest {
            query: SPACES_QUERY,
            variables: SpacesVariables { first },
        };

        let response = self
            .client
            .post(&self.config.hub_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SnapshotError::Timeout
                } else if e.is_connect() {
                    SnapshotError::Unavailable
                } else {
                    SnapshotError::Request(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SnapshotError::Api { status, message });
        }

        let result: GraphQlResponse = response.json().await.map_err(SnapshotError::Request)?;
        Ok(result.data.spaces)
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Serialize)]
struct GraphQlRequest {
    query: &'static str,
    variables: SpacesVariables,
}

#[derive(Serialize)]
struct SpacesVariables {
    first: u32,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: SpacesData,
}

#[derive(Deserialize)]
struct SpacesData {
    #[serde(default)]
    spaces: Vec<Space>,
}

/// A governance space as returned by the hub
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Space {
    pub id: String,
    pub name: Option<String>,
    pub about: Option<String>,
    pub network: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(rename = "followersCount", default)]
    pub followers_count: Option<u64>,
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the Snapshot hub
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot hub unreachable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Hub error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_requests_listing_fields() {
        for field in ["id", "name", "about", "network", "followersCount"] {
            assert!(SPACES_QUERY.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn test_response_deserializes() {
        let raw = r#"{
            "data": {
                "spaces": [
                    {
                        "id": "jbdao.eth",
                        "name": "JuiceboxDAO",
                        "about": "Community funding",
                        "network": "1",
                        "members": ["0x0000000000000000000000000000000000000001"],
                        "followersCount": 42
                    },
                    {"id": "bare.eth", "name": null, "about": null, "network": null}
                ]
            }
        }"#;

        let parsed: GraphQlResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data.spaces.len(), 2);
        assert_eq!(parsed.data.spaces[0].id, "jbdao.eth");
        assert_eq!(parsed.data.spaces[0].followers_count, Some(42));
        assert!(parsed.data.spaces[1].members.is_empty());
    }

    #[test]
    fn test_request_body_shape() {
        let body = GraphQlRequest {
            query: SPACES_QUERY,
            variables: SpacesVariables { first: 16 },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["variables"]["first"], 16);
        assert!(json["query"].as_str().unwrap().contains("spaces("));
    }
}
