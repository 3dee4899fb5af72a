//! Discord REST Client
//!
//! HTTP client for the two Discord-facing proxies: the bot command
//! passthrough and the contact-form webhook relay. The bot token and the
//! webhook URL live server-side only; callers never see them.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::DiscordConfig;

/// Discord REST API client
pub struct DiscordClient {
    client: Client,
    config: DiscordConfig,
}

/// An upstream response relayed verbatim: status code plus JSON body
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

/// A contact-form submission relayed to the webhook
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl DiscordClient {
    /// Create a new Discord client with the given configuration
    pub fn new(config: DiscordConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &DiscordConfig {
        &self.config
    }

    /// Build the bot command passthrough URL
    fn command_url(&self, command: &str) -> String {
        format!(
            "{}/commands?command={}",
            self.config.api_base,
            urlencoding::encode(command)
        )
    }

    /// Run a bot command and relay the response as-is
    ///
    /// Any HTTP response from Discord, success or not, is returned to the
    /// caller verbatim; only transport failures become errors. No retry.
    pub async fn run_command(&self, command: &str) -> Result<UpstreamResponse, DiscordError> {
        if self.config.bot_token.is_empty() {
            return Err(DiscordError::NotConfigured("discord.bot_token"));
        }

        let response = self
            .client
            .get(self.command_url(command))
            .header("Authorization", format!("Bot {}", self.config.bot_token))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(Value::Null);

        Ok(UpstreamResponse { status, body })
    }

    /// Relay a contact-form submission to the configured webhook
    ///
    /// Returns the upstream status code. Discord answers 204 on success.
    pub async fn send_contact(&self, msg: &ContactMessage) -> Result<u16, DiscordError> {
        if self.config.contact_webhook.is_empty() {
            return Err(DiscordError::NotConfigured("discord.contact_webhook"));
        }

        let payload = WebhookPayload::from(msg);

        let response = self
            .client
            .post(&self.config.contact_webhook)
            .json(&payload)
            .send()
            .await
            .map_err(classify)?;

        Ok(response.status().as_u16())
    }
}

/// Classify a transport error the way the caller cares about it
fn classify(e: reqwest::Error) -> DiscordError {
    if e.is_timeout() {
        DiscordError::Timeout
    } else if e.is_connect() {
        DiscordError::Unavailable
    } else {
        DiscordError::Request(e)
    }
}

// ============================================
// Webhook payload
// ============================================

#[derive(Debug, Serialize)]
struct WebhookPayload {
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    description: String,
    fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
struct EmbedField {
    name: String,
    value: String,
}

impl From<&ContactMessage> for WebhookPayload {
    fn from(msg: &ContactMessage) -> Self {
        Self {
            embeds: vec![Embed {
                title: "Contact form submission".to_string(),
                description: msg.message.clone(),
                fields: vec![
                    EmbedField {
                        name: "From".to_string(),
                        value: msg.name.clone(),
                    },
                    EmbedField {
                        name: "Email".to_string(),
                        value: msg.email.clone(),
                    },
                ],
            }],
        }
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to Discord
#[derive(Error, Debug)]
pub enum DiscordError {
    #[error("Discord unreachable")]
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

    fn test_config() -> DiscordConfig {
        DiscordConfig {
            bot_token: "token".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_command_url_encodes_query() {
        let client = DiscordClient::new(test_config());
        let url = client.command_url("proposals current cycle");
        assert_eq!(
            url,
            "https://discord.com/api/v10/commands?command=proposals%20current%20cycle"
        );
    }

    #[test]
    fn test_webhook_payload_shape() {
        let msg = ContactMessage {
            name: "jig".to_string(),
            email: "jig@example.com".to_string(),
            message: "hello".to_string(),
        };

        let payload = WebhookPayload::from(&msg);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["embeds"][0]["description"], "hello");
        assert_eq!(json["embeds"][0]["fields"][0]["value"], "jig");
        assert_eq!(json["embeds"][0]["fields"][1]["value"], "jig@example.com");
    }

    #[tokio::test]
    async fn test_run_command_requires_token() {
        let client = DiscordClient::new(DiscordConfig::default());
        let err = client.run_command("proposals").await.unwrap_err();
        assert!(matches!(err, DiscordError::NotConfigured("discord.bot_token")));
    }

    #[tokio::test]
    async fn test_send_contact_requires_webhook() {
        let client = DiscordClient::new(test_config());
        let msg = ContactMessage {
            name: String::new(),
            email: String::new(),
            message: "hi".to_string(),
        };
        let err = client.send_contact(&msg).await.unwrap_err();
        assert!(matches!(
            err,
            DiscordError::NotConfigured("discord.contact_webhook")
        ));
    }
}
