//! API endpoint configuration.
//!
//! The base URL and request timeout vary per deployment and are read from
//! environment variables, with local-development defaults.

use crate::errors::{Error, Result};
use std::time::Duration;

/// Environment variable holding the admin API base URL.
pub const BASE_URL_ENV: &str = "ADMIN_API_BASE_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "ADMIN_API_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoint configuration for the admin API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the admin API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Reads the endpoint configuration from the environment, falling back to
    /// local-development defaults when variables are unset.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| Error::Config {
                message: format!("Invalid {TIMEOUT_ENV}: {e}"),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
