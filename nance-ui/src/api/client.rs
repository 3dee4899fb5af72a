//! HTTP API Client
//!
//! Functions for communicating with the Nance gateway. Response types are
//! duplicated here rather than shared with the gateway crate; the gateway
//! pulls in native-only dependencies that have no place in a WASM build.

use gloo_net::http::Request;

/// Default gateway base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3003/api/v1";

/// Get the gateway base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("nance_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the gateway base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("nance_api_url", url);
        }
    }
}

// ============ Response Types ============

/// A governance space as listed by the gateway
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
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

#[derive(Debug, serde::Deserialize)]
pub struct SpaceListResponse {
    pub total: usize,
    pub spaces: Vec<Space>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SessionInitResponse {
    pub token: String,
    pub expires_in: u64,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_store: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: String,
    message: String,
}

/// Extract the error message from a gateway error body
async fn error_message(response: gloo_net::http::Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("Gateway error {}", response.status()),
    }
}

// ============ API Functions ============

/// Fetch the governance space listing
pub async fn fetch_spaces() -> Result<Vec<Space>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/snapshot/spaces", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body: SpaceListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(body.spaces)
}

/// Send a contact-form submission
pub async fn send_contact(name: &str, email: &str, message: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/discord/contact", api_base))
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "message": message,
        }))
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Mint a short-lived session token for the connected wallet
pub async fn init_session(address: &str) -> Result<SessionInitResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/session/init", api_base))
        .header("x-wallet-address", address)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete the session entry for the given wallet address
pub async fn logout(address: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/session/logout", api_base))
        .query([("address", address)])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Check the gateway health endpoint
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();
    let health_url = api_base.replace("/api/v1", "/health");

    let response = Request::get(&health_url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Gateway is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
