//! Configuration management for the admin console client.
//!
//! Deployment-varying values (API endpoint, timeout) come from environment
//! variables; screen defaults (page size, debounce window, image base URL)
//! come from an optional `admin.toml` next to the binary.

/// API endpoint configuration from environment variables
pub mod api;

/// Screen defaults loaded from admin.toml
pub mod settings;

use crate::errors::Result;

/// Complete application configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API endpoint configuration (base URL, timeout)
    pub api: api::ApiConfig,
    /// Screen defaults (page size, debounce window, image base URL)
    pub settings: settings::Settings,
}

/// Loads the full application configuration from the environment and the
/// default `admin.toml` location (missing file falls back to defaults).
pub fn load_app_configuration() -> Result<AppConfig> {
    let api = api::ApiConfig::from_env()?;
    let settings = settings::load_default()?;
    Ok(AppConfig { api, settings })
}
