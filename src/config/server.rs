//! Server configuration module for loading HTTP and feed settings from
//! environment variables.
//!
//! All settings have defaults so the server starts with an empty
//! environment; the `.env` file is loaded by `main` before this module is
//! consulted.

use std::net::SocketAddr;
use std::time::Duration;

use crate::errors::{Error, Result};

/// Default TCP port the API listens on
const DEFAULT_PORT: u16 = 3000;

/// Default upper bound on a single feed fetch
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 30;

/// Resolved server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Upper bound on a single iCal feed fetch, to keep sync request latency bounded
    pub feed_timeout: Duration,
}

/// Loads server settings from `HOST`, `PORT`, and `FEED_TIMEOUT_SECS`.
///
/// Unset variables fall back to `0.0.0.0:3000` and a 30 second feed timeout.
/// Set-but-invalid values are configuration errors rather than silent
/// fallbacks.
pub fn load_server_config() -> Result<ServerConfig> {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|e| Error::Config {
            message: format!("invalid PORT value '{raw}': {e}"),
        })?,
        Err(_) => DEFAULT_PORT,
    };
    let bind_addr: SocketAddr = format!("{host}:{port}").parse().map_err(|e| Error::Config {
        message: format!("invalid HOST/PORT combination '{host}:{port}': {e}"),
    })?;

    let feed_timeout_secs = match std::env::var("FEED_TIMEOUT_SECS") {
        Ok(raw) => raw.parse::<u64>().map_err(|e| Error::Config {
            message: format!("invalid FEED_TIMEOUT_SECS value '{raw}': {e}"),
        })?,
        Err(_) => DEFAULT_FEED_TIMEOUT_SECS,
    };

    Ok(ServerConfig {
        bind_addr,
        feed_timeout: Duration::from_secs(feed_timeout_secs),
    })
}
