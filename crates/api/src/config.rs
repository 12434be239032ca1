//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PEPPERCORN_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection
//!   string. Append `sslmode=verify-full` in deployment: the connection is
//!   TLS-encrypted and the server certificate must validate.
//!
//! ## Optional
//! - `PEPPERCORN_HOST` - Bind address (default: 127.0.0.1)
//! - `PEPPERCORN_PORT` (or `PORT`) - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("PEPPERCORN_DATABASE_URL")?;
        let host = get_env_or_default("PEPPERCORN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PEPPERCORN_HOST".to_string(), e.to_string())
            })?;
        let port = get_port()?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get the listen port, falling back to the generic `PORT` variable used by
/// most hosting platforms.
fn get_port() -> Result<u16, ConfigError> {
    let raw = std::env::var("PEPPERCORN_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".to_string());

    raw.parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar("PEPPERCORN_PORT".to_string(), e.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = ApiConfig {
            database_url: SecretString::from("postgres://user:hunter2@db/peppercorn"),
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("hunter2"));
    }
}
