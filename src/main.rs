//! Nance Gateway Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Loaded from the first of `$XDG_CONFIG_HOME/nance/config.toml`,
//! `/etc/nance/config.toml` or `./config.toml`, with `NANCE_*` environment
//! variables overriding individual settings (see `config generate` for the
//! full list).

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nance_gateway::api::{serve, ApiConfig, AppState};
use nance_gateway::auto::AutoClient;
use nance_gateway::config::{generate_default_config, Config, LoggingConfig};
use nance_gateway::discord::DiscordClient;
use nance_gateway::session::SessionStore;
use nance_gateway::snapshot::SnapshotClient;

#[derive(Parser)]
#[command(name = "nance-gateway")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Backend-for-frontend gateway for the Nance governance app")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a config file (overrides the default search locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the gateway server (the default)
    Serve,

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print a commented default configuration file
    Generate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Config {
            command: ConfigCommands::Generate,
        } => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Commands::Serve => run_server(cli.config).await,
    }
}

async fn run_server(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match &config_path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Nance gateway v{}", env!("CARGO_PKG_VERSION"));

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_ms: config.api.request_timeout_secs * 1000,
        ..Default::default()
    };

    // Outbound clients; each holds its own credential from config
    let discord = Arc::new(DiscordClient::new(config.discord));
    let auto = Arc::new(AutoClient::new(config.auto));
    let snapshot = Arc::new(SnapshotClient::new(config.snapshot));

    if discord.config().bot_token.is_empty() {
        tracing::warn!("discord.bot_token not set; the command passthrough will answer 503");
    }
    if auto.config().key.is_empty() {
        tracing::warn!("auto.key not set; the events trigger will answer 503");
    }

    // Session store is optional; without it the session routes answer 503
    let state = if let Some(session_config) = &config.session {
        tracing::info!(
            "Connecting session store at {}:{}",
            session_config.host,
            session_config.port
        );

        let sessions = Arc::new(
            SessionStore::connect(session_config)
                .await
                .context("connecting to the session store")?,
        );

        match sessions.ping().await {
            Ok(_) => tracing::info!("Session store connection verified"),
            Err(e) => tracing::warn!("Session store not responding: {} (routes will error)", e),
        }

        AppState::with_sessions(discord, auto, snapshot, api_config.clone(), sessions)
    } else {
        tracing::info!("Session store disabled (no [session] config)");
        AppState::new(discord, auto, snapshot, api_config.clone())
    };

    serve(state, &api_config).await?;

    tracing::info!("Nance gateway stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_config_generate() {
        let cli = Cli::try_parse_from(["nance-gateway", "config", "generate"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Generate
            })
        ));
    }

    #[test]
    fn test_cli_defaults_to_serve() {
        let cli = Cli::try_parse_from(["nance-gateway"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("nance_gateway={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
