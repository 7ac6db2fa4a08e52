//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Transport failures,
//! non-2xx API responses, and client-side validation failures are kept as
//! distinct variants so screens can branch on them (a missing entity becomes a
//! "could not load" message, a validation failure keeps the form open, etc.).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing configuration (environment variables, admin.toml).
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Connection-level failure: timeout, DNS, refused connection.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Non-2xx API response. `message` comes from the response body's
    /// `message` field when present, else a generic "HTTP error <status>".
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The requested entity does not exist (HTTP 404).
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Client-side validation failure. No request is sent when this is raised.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: &'static str, message: String },

    /// Response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// File upload failure (multipart POST or missing URL in the response).
    #[error("Upload error: {message}")]
    Upload { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Transport {
            message: value.to_string(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
