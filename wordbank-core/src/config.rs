//! Environment-driven configuration.
//!
//! Layered dotenv loading: `.env.<WORDBANK_ENV>` first (environment name
//! defaults to `local`), then `.env` as a fallback for anything the
//! environment-specific file leaves unset. Already-exported process
//! variables always win over both files.

use std::env;
use std::net::SocketAddr;

use crate::error::CoreError;

/// Default bind address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Service configuration, injected into handlers at construction time.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Shared secret for the `Authorization: ApiKey <key>` check
    pub api_key: String,
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `DATABASE_URL` and `API_KEY` are required; `BIND_ADDR` defaults to
    /// `127.0.0.1:8080`. Missing dotenv files are not an error.
    pub fn from_env() -> Result<Self, CoreError> {
        let env_name = env::var("WORDBANK_ENV").unwrap_or_else(|_| "local".to_string());
        if dotenvy::from_filename(format!(".env.{env_name}")).is_ok() {
            tracing::debug!(env = %env_name, "loaded environment-specific dotenv file");
        }
        let _ = dotenvy::dotenv();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| CoreError::MissingEnv { name: "DATABASE_URL" })?;
        let api_key =
            env::var("API_KEY").map_err(|_| CoreError::MissingEnv { name: "API_KEY" })?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| CoreError::Config {
                reason: format!("invalid BIND_ADDR: {e}"),
            })?;

        if api_key.is_empty() {
            return Err(CoreError::Config {
                reason: "API_KEY must not be empty".to_string(),
            });
        }

        Ok(Self {
            database_url,
            api_key,
            bind_addr,
        })
    }
}
