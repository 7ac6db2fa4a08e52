//! reqwest-backed implementation of the [`Transport`] seam.
//!
//! Builds one `reqwest::Client` with the configured timeout and attaches a
//! bearer token from the injected [`SessionStore`] when one is present.

use crate::config::api::ApiConfig;
use crate::errors::{Error, Result};
use crate::session::SessionStore;
use crate::transport::{FilePart, Transport, error_from_response};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for the admin API.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl HttpTransport {
    /// Creates a transport from endpoint configuration and a shared session.
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, path: &str, builder: RequestBuilder) -> Result<Value> {
        let builder = self.authorize(builder).await;
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), path, &body));
        }

        debug!(path, status = status.as_u16(), "request ok");
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(Into::into)
    }

    async fn send_json(&self, method: Method, path: &str, body: Value) -> Result<Value> {
        let builder = self.client.request(method, self.url(path)).json(&body);
        self.execute(path, builder).await
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let builder = self.client.get(self.url(path)).query(query);
        self.execute(path, builder).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.send_json(Method::POST, path, body).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.send_json(Method::PUT, path, body).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.send_json(Method::PATCH, path, body).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        let builder = self.client.delete(self.url(path));
        self.execute(path, builder).await
    }

    async fn post_form(&self, path: &str, parts: Vec<FilePart>) -> Result<Value> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            let file = reqwest::multipart::Part::bytes(part.bytes)
                .file_name(part.filename)
                .mime_str(&part.mime)
                .map_err(|e| Error::Upload {
                    message: format!("Invalid MIME type: {e}"),
                })?;
            form = form.part(part.field, file);
        }

        let builder = self.client.post(self.url(path)).multipart(form);
        self.execute(path, builder).await
    }
}
