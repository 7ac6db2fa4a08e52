//! Screen defaults loaded from admin.toml.
//!
//! These values shape every list screen: how many rows a page shows, how long
//! the search debounce window is, and which base URL relative image paths are
//! resolved against. The file is optional; defaults cover local development.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Screen defaults for list controllers and image resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Rows per page when a screen does not override the limit
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Quiet window for the search debouncer, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Base URL prefixed onto relative image paths; falls back to the API base
    #[serde(default)]
    pub image_base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            image_base_url: None,
        }
    }
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

const fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Loads screen settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read settings file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse admin.toml: {e}"),
    })
}

/// Loads settings from the default location (./admin.toml), falling back to
/// defaults when the file does not exist.
pub fn load_default() -> Result<Settings> {
    let path = Path::new("admin.toml");
    if path.exists() {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}
