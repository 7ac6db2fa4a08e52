//! JSON-over-HTTP transport seam.
//!
//! Resource clients talk to the admin API through the [`Transport`] trait so
//! that tests can substitute an in-memory fake for the reqwest-backed
//! implementation. The trait's error contract is uniform: any non-2xx response
//! becomes an [`Error`](crate::errors::Error) whose message is taken from the
//! response body's `message` field when present, with 404 mapped to the
//! dedicated `NotFound` variant.

/// reqwest-backed transport implementation
pub mod http;

use crate::errors::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;

pub use http::HttpTransport;

/// One file in a multipart upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Multipart field name (e.g. "file")
    pub field: String,
    /// Original filename, forwarded to the server
    pub filename: String,
    /// MIME type (e.g. "image/jpeg")
    pub mime: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// JSON-over-HTTP client seam used by every resource client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` with the given query-string pairs.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value>;

    /// POST a JSON body to `path`.
    async fn post(&self, path: &str, body: Value) -> Result<Value>;

    /// PUT a JSON body to `path`.
    async fn put(&self, path: &str, body: Value) -> Result<Value>;

    /// PATCH a JSON body to `path`.
    async fn patch(&self, path: &str, body: Value) -> Result<Value>;

    /// DELETE `path`.
    async fn delete(&self, path: &str) -> Result<Value>;

    /// POST a multipart form (file upload) to `path`.
    async fn post_form(&self, path: &str, parts: Vec<FilePart>) -> Result<Value>;
}

/// Converts a non-2xx response into the uniform error contract: 404 becomes
/// `NotFound`, anything else becomes `Http` with the body's `message` field
/// when one is present.
#[must_use]
pub fn error_from_response(status: u16, path: &str, body: &str) -> Error {
    if status == 404 {
        return Error::NotFound {
            path: path.to_string(),
        };
    }

    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| format!("HTTP error {status}"));

    Error::Http { status, message }
}
