//! Image upload collaborator.
//!
//! Uploads run before the entity save that references their URLs; a failed
//! entity save after a successful upload leaves an orphaned file server-side,
//! which is accepted rather than compensated for.

use crate::errors::{Error, Result};
use crate::transport::{FilePart, Transport};
use futures::future::try_join_all;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const UPLOAD_PATH: &str = "/uploads/image";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Multipart image uploader shared by every form screen with media fields.
#[derive(Clone)]
pub struct Uploader {
    transport: Arc<dyn Transport>,
}

impl Uploader {
    /// Creates the uploader over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Uploads one image and returns the server-assigned URL.
    pub async fn upload_image(&self, part: FilePart) -> Result<String> {
        if part.bytes.is_empty() {
            return Err(Error::Upload {
                message: format!("File {} is empty", part.filename),
            });
        }
        let filename = part.filename.clone();
        let value = self.transport.post_form(UPLOAD_PATH, vec![part]).await?;
        let response: UploadResponse = serde_json::from_value(value)?;
        debug!(%filename, url = %response.url, "image uploaded");
        Ok(response.url)
    }

    /// Uploads several images concurrently. Any failure fails the whole call;
    /// files that did land before the failure are not rolled back.
    pub async fn upload_multiple(&self, parts: Vec<FilePart>) -> Result<Vec<String>> {
        try_join_all(parts.into_iter().map(|part| self.upload_image(part))).await
    }
}

/// Prefixes a relative upload path with the configured image host. Already
/// absolute URLs pass through unchanged.
#[must_use]
pub fn resolve_image_url(base: Option<&str>, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    match base {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::FakeApi;

    fn jpeg(name: &str) -> FilePart {
        FilePart {
            field: "file".to_string(),
            filename: name.to_string(),
            mime: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[tokio::test]
    async fn test_upload_returns_server_url() -> Result<()> {
        let api = FakeApi::new();
        let uploader = Uploader::new(api.clone());

        let url = uploader.upload_image(jpeg("hero.jpg")).await?;
        assert_eq!(url, "/uploads/img_1.jpg");
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_file_rejected_without_network_call() {
        let api = FakeApi::new();
        let uploader = Uploader::new(api.clone());

        let mut part = jpeg("empty.png");
        part.bytes.clear();
        let result = uploader.upload_image(part).await;
        assert!(matches!(result.unwrap_err(), Error::Upload { .. }));
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_multiple_uploads_resolve_in_order() -> Result<()> {
        let api = FakeApi::new();
        let uploader = Uploader::new(api.clone());

        let urls = uploader
            .upload_multiple(vec![jpeg("a.jpg"), jpeg("b.jpg"), jpeg("c.jpg")])
            .await?;
        assert_eq!(urls.len(), 3);
        assert!(urls.iter().all(|u| u.starts_with("/uploads/img_")));
        Ok(())
    }

    #[tokio::test]
    async fn test_one_failure_fails_the_batch() {
        let api = FakeApi::new();
        let uploader = Uploader::new(api.clone());

        api.fail_next(500, "disk full");
        let result = uploader.upload_multiple(vec![jpeg("a.jpg"), jpeg("b.jpg")]).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_image_url() {
        assert_eq!(
            resolve_image_url(Some("https://cdn.example.com"), "/uploads/img_1.jpg"),
            "https://cdn.example.com/uploads/img_1.jpg"
        );
        assert_eq!(
            resolve_image_url(Some("https://cdn.example.com/"), "uploads/img_1.jpg"),
            "https://cdn.example.com/uploads/img_1.jpg"
        );
        assert_eq!(
            resolve_image_url(Some("https://cdn.example.com"), "https://other.example.com/x.jpg"),
            "https://other.example.com/x.jpg"
        );
        assert_eq!(resolve_image_url(None, "/uploads/img_1.jpg"), "/uploads/img_1.jpg");
    }
}
