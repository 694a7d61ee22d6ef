//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before any request is made.
//!
//! ## Variables
//!
//! - `SHORTENER_URL` - Base URL of the shortener server
//!   (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `warn`)
//!
//! A `.env` file in the working directory is honored via `dotenvy`.

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default server base when `SHORTENER_URL` is not set.
///
/// Matches the server's default bind address.
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shortener server; `/shorten` is resolved against it.
    pub server_url: Url,
    /// Log filter directive passed to the tracing subscriber.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, with
    /// `server_override` (e.g. a `--server` CLI flag) taking priority over
    /// `SHORTENER_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured server base is not a valid URL.
    pub fn load(server_override: Option<&str>) -> Result<Self> {
        let raw = match server_override {
            Some(server) => server.to_string(),
            None => env::var("SHORTENER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
        };

        let server_url = Url::parse(&raw)
            .with_context(|| format!("shortener server base is not a valid URL: {raw}"))?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            server_url,
            log_level,
        })
    }
}
