//! Session Store
//!
//! Redis-backed store for short-lived wallet-login session tokens. The
//! gateway only writes and deletes entries; the lookup side lives in the
//! external auth service sharing the same store.
//!
//! The write path keys by token while the delete path keys by address. That
//! asymmetry is inherited from the system being fronted and is kept as-is;
//! the method names make it visible at the call sites.

use redis::{aio::ConnectionManager, AsyncCommands, Client};
use thiserror::Error;

use crate::config::SessionConfig;

/// Redis-backed session token store
#[derive(Clone)]
pub struct SessionStore {
    conn: ConnectionManager,
    token_ttl_secs: u64,
}

impl SessionStore {
    /// Connect to Redis using the given configuration
    pub async fn connect(config: &SessionConfig) -> Result<Self, SessionError> {
        let client = Client::open(redis_url(config))?;
        let conn = client.get_connection_manager().await?;

        Ok(Self {
            conn,
            token_ttl_secs: config.token_ttl_secs,
        })
    }

    /// Store a token -> address mapping with the configured expiry
    pub async fn put(&self, token: &str, address: &str) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(token, address, self.token_ttl_secs).await?;
        Ok(())
    }

    /// Delete the entry keyed by wallet address (see module docs)
    pub async fn remove(&self, address: &str) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        let _: u64 = conn.del(address).await?;
        Ok(())
    }

    /// Check the store is reachable
    pub async fn ping(&self) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Configured token lifetime in seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl_secs
    }
}

/// Build a Redis connection URL from host/port/password/TLS settings
fn redis_url(config: &SessionConfig) -> String {
    let scheme = if config.tls { "rediss" } else { "redis" };

    if config.password.is_empty() {
        format!("{}://{}:{}", scheme, config.host, config.port)
    } else {
        format!(
            "{}://:{}@{}:{}",
            scheme,
            urlencoding::encode(&config.password),
            config.host,
            config.port
        )
    }
}

/// Errors from the session store
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session store error: {0}")]
    Redis(#[from] redis::RedisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_password() {
        let config = SessionConfig::default();
        assert_eq!(redis_url(&config), "redis://127.0.0.1:6379");
    }

    #[test]
    fn test_url_with_password_and_tls() {
        let config = SessionConfig {
            host: "redis.internal".to_string(),
            port: 6380,
            password: "p@ss/word".to_string(),
            tls: true,
            ..Default::default()
        };
        assert_eq!(
            redis_url(&config),
            "rediss://:p%40ss%2Fword@redis.internal:6380"
        );
    }
}
