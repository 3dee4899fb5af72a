//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub discord: DiscordConfig,

    #[serde(default)]
    pub auto: AutoConfig,

    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Session store settings. When absent, the session routes answer 503.
    pub session: Option<SessionConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3003
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Discord proxy configuration
///
/// The bot token and webhook URL are server-side secrets and are never
/// echoed back to callers.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub bot_token: String,

    #[serde(default = "default_discord_api_base")]
    pub api_base: String,

    /// Webhook that receives contact-form submissions
    #[serde(default)]
    pub contact_webhook: String,

    #[serde(default = "default_upstream_timeout")]
    pub request_timeout_ms: u64,
}

fn default_discord_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_upstream_timeout() -> u64 {
    5000
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_base: default_discord_api_base(),
            contact_webhook: String::new(),
            request_timeout_ms: default_upstream_timeout(),
        }
    }
}

/// nance-auto scheduler service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AutoConfig {
    #[serde(default = "default_auto_url")]
    pub base_url: String,

    /// Bearer key for the automation service
    #[serde(default)]
    pub key: String,

    #[serde(default = "default_upstream_timeout")]
    pub request_timeout_ms: u64,
}

fn default_auto_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            base_url: default_auto_url(),
            key: String::new(),
            request_timeout_ms: default_upstream_timeout(),
        }
    }
}

/// Snapshot GraphQL hub configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_url")]
    pub hub_url: String,

    #[serde(default = "default_upstream_timeout")]
    pub request_timeout_ms: u64,
}

fn default_snapshot_url() -> String {
    "https://hub.snapshot.org/graphql".to_string()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            hub_url: default_snapshot_url(),
            request_timeout_ms: default_upstream_timeout(),
        }
    }
}

/// Redis session store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_redis_host")]
    pub host: String,

    #[serde(default = "default_redis_port")]
    pub port: u16,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub tls: bool,

    /// Lifetime of a session token, in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

fn default_redis_host() -> String {
    "127.0.0.1".to_string()
}

fn default_redis_port() -> u16 {
    6379
}

fn default_token_ttl() -> u64 {
    30
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: default_redis_host(),
            port: default_redis_port(),
            password: String::new(),
            tls: false,
            token_ttl_secs: default_token_ttl(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("nance").join("config.toml")),
            Some(PathBuf::from("/etc/nance/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(host) = std::env::var("NANCE_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("NANCE_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Discord overrides
        if let Ok(token) = std::env::var("NANCE_DISCORD_BOT_TOKEN") {
            self.discord.bot_token = token;
        }
        if let Ok(webhook) = std::env::var("NANCE_DISCORD_CONTACT_WEBHOOK") {
            self.discord.contact_webhook = webhook;
        }

        // nance-auto overrides
        if let Ok(url) = std::env::var("NANCE_AUTO_URL") {
            self.auto.base_url = url;
        }
        if let Ok(key) = std::env::var("NANCE_AUTO_KEY") {
            self.auto.key = key;
        }

        // Snapshot overrides
        if let Ok(url) = std::env::var("NANCE_SNAPSHOT_URL") {
            self.snapshot.hub_url = url;
        }

        // Session store overrides. Setting NANCE_REDIS_HOST enables the
        // session routes even without a [session] section in the file.
        if let Ok(host) = std::env::var("NANCE_REDIS_HOST") {
            let session = self.session.get_or_insert_with(SessionConfig::default);
            session.host = host;
        }
        if let Ok(port) = std::env::var("NANCE_REDIS_PORT") {
            if let Ok(p) = port.parse() {
                let session = self.session.get_or_insert_with(SessionConfig::default);
                session.port = p;
            }
        }
        if let Ok(password) = std::env::var("NANCE_REDIS_PASSWORD") {
            let session = self.session.get_or_insert_with(SessionConfig::default);
            session.password = password;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("NANCE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("NANCE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            discord: DiscordConfig::default(),
            auto: AutoConfig::default(),
            snapshot: SnapshotConfig::default(),
            session: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nance gateway configuration
#
# Environment variables override these settings:
# - NANCE_API_HOST / NANCE_API_PORT
# - NANCE_DISCORD_BOT_TOKEN / NANCE_DISCORD_CONTACT_WEBHOOK
# - NANCE_AUTO_URL / NANCE_AUTO_KEY
# - NANCE_SNAPSHOT_URL
# - NANCE_REDIS_HOST / NANCE_REDIS_PORT / NANCE_REDIS_PASSWORD
# - NANCE_LOG_LEVEL / NANCE_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 3003

# Allowed CORS origins
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Request timeout in seconds
request_timeout_secs = 30

[discord]
# Discord bot token (server-side secret, never relayed to callers)
bot_token = ""

# Discord REST API base
api_base = "https://discord.com/api/v10"

# Webhook URL receiving contact-form submissions
contact_webhook = ""

# Upstream request timeout (ms)
request_timeout_ms = 5000

[auto]
# nance-auto scheduler service
base_url = "http://localhost:3001"

# Bearer key for the automation service
key = ""

[snapshot]
# Snapshot GraphQL hub
hub_url = "https://hub.snapshot.org/graphql"

[session]
# Redis session store. Remove this section to disable the session routes.
host = "127.0.0.1"
port = 6379
password = ""
tls = false

# Session token lifetime (seconds)
token_ttl_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/nance/gateway.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 3003);
        assert_eq!(config.discord.api_base, "https://discord.com/api/v10");
        assert_eq!(config.snapshot.hub_url, "https://hub.snapshot.org/graphql");
        assert!(config.session.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
port = 4000

[discord]
bot_token = "abc"

[session]
host = "redis.internal"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.port, 4000);
        assert_eq!(config.discord.bot_token, "abc");

        let session = config.session.unwrap();
        assert_eq!(session.host, "redis.internal");
        assert_eq!(session.port, 6379);
        assert_eq!(session.token_ttl_secs, 30);
    }

    #[test]
    fn test_generated_config_parses() {
        let content = generate_default_config();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.api.port, 3003);
        assert!(config.session.is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
