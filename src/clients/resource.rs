//! Generic REST resource abstraction shared by every typed client.
//!
//! All list endpoints return the same [`Page`] envelope and accept the same
//! pagination keys; [`ListQuery`] renders them into query-string pairs with
//! the contract that unset keys are *omitted entirely* - omission, not null,
//! signals "no filter". Mutations return a [`MutationOutcome`] `{message, data?}`.

use crate::errors::Result;
use crate::transport::Transport;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Paginated list-response envelope returned by every list endpoint.
///
/// `page` is 1-indexed; requesting a page beyond `pages` yields an empty
/// `data` array, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows for the requested page (at most `limit` of them)
    pub data: Vec<T>,
    /// Total row count across all pages
    pub total: u64,
    /// The 1-indexed page this envelope holds
    pub page: u32,
    /// Requested page size
    pub limit: u32,
    /// Total page count: `ceil(total / limit)`, never below 1
    pub pages: u32,
}

impl<T> Page<T> {
    /// Computes the page count for a total and limit: `ceil(total / limit)`,
    /// clamped to at least 1 so an empty result set still has one (empty) page.
    #[must_use]
    pub const fn expected_pages(total: u64, limit: u32) -> u32 {
        if limit == 0 {
            return 1;
        }
        let pages = total.div_ceil(limit as u64) as u32;
        if pages == 0 { 1 } else { pages }
    }
}

/// Primary key of an entity: numeric for most entities, a code string for
/// vouchers. Rendered into URL path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    /// Numeric primary key
    Num(i64),
    /// String primary key (e.g. a voucher code)
    Code(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Code(c) => write!(f, "{c}"),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Code(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Code(value)
    }
}

/// Response shape of create/update/remove calls: a human-readable message and
/// optionally the affected entity.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationOutcome {
    /// Server-provided message, surfaced to the user verbatim
    pub message: String,
    /// The created/updated entity, when the server returns it
    #[serde(default)]
    pub data: Option<Value>,
}

/// List-endpoint query state: pagination, free-text search, and entity-specific
/// filters. Unset keys never reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-indexed page to request; omitted when `None`
    pub page: Option<u32>,
    /// Page size; omitted when `None`
    pub limit: Option<u32>,
    /// Free-text search term; omitted when `None`
    pub search: Option<String>,
    /// Entity-specific filter pairs (e.g. `("status", "active")`)
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    /// Empty query: no pagination keys, no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page (builder style).
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size (builder style).
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the search term (builder style).
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Adds a filter pair (builder style).
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set_filter(key, Some(value));
        self
    }

    /// Sets or clears a filter in place. `None` removes the key entirely, so
    /// a cleared filter is indistinguishable from one that was never set.
    pub fn set_filter(&mut self, key: impl Into<String>, value: Option<impl ToString>) {
        let key = key.into();
        self.filters.retain(|(k, _)| *k != key);
        if let Some(value) = value {
            self.filters.push((key, value.to_string()));
        }
    }

    /// Renders the query into query-string pairs, omitting every unset key.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        params.extend(self.filters.iter().cloned());
        params
    }
}

/// Generic REST client for one resource family: a base path for detail and
/// mutation routes plus a (possibly different) list path.
///
/// No retry, no caching, no batching - it shapes requests and decodes typed
/// responses, nothing more.
#[derive(Clone)]
pub struct ResourceClient {
    transport: Arc<dyn Transport>,
    base: String,
    list_path: String,
}

impl ResourceClient {
    /// Creates a client for the resource rooted at `base`, listing at `list_path`.
    pub fn new(
        transport: Arc<dyn Transport>,
        base: impl Into<String>,
        list_path: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base: base.into(),
            list_path: list_path.into(),
        }
    }

    /// The transport this client issues requests through.
    #[must_use]
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    fn detail_path(&self, id: &EntityId) -> String {
        format!("{}/{id}", self.base)
    }

    /// Fetches one page of the resource.
    pub async fn list<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<Page<T>> {
        let value = self
            .transport
            .get(&self.list_path, &query.to_params())
            .await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Fetches one page from an arbitrary list path (paginated sub-resources).
    pub async fn list_at<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<Page<T>> {
        let value = self.transport.get(path, &query.to_params()).await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Fetches a single entity by id. A missing id surfaces as
    /// [`Error::NotFound`](crate::errors::Error::NotFound).
    pub async fn get_by_id<T: DeserializeOwned>(&self, id: &EntityId) -> Result<T> {
        let value = self.transport.get(&self.detail_path(id), &[]).await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Creates an entity by POSTing the dto to the base path.
    pub async fn create<D: Serialize + Sync>(&self, dto: &D) -> Result<MutationOutcome> {
        self.create_at(&self.base, dto).await
    }

    /// Creates an entity at a non-standard path (e.g. `/users/admin/createUser`).
    pub async fn create_at<D: Serialize + Sync>(
        &self,
        path: &str,
        dto: &D,
    ) -> Result<MutationOutcome> {
        let body = serde_json::to_value(dto)?;
        let value = self.transport.post(path, body).await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Partially updates an entity: fields the dto leaves unset are omitted
    /// from the body and stay unchanged server-side.
    pub async fn update<D: Serialize + Sync>(
        &self,
        id: &EntityId,
        dto: &D,
    ) -> Result<MutationOutcome> {
        let body = serde_json::to_value(dto)?;
        let value = self.transport.put(&self.detail_path(id), body).await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// PATCHes a dedicated sub-route of an entity (e.g. `/:id/status`).
    pub async fn patch_action<D: Serialize + Sync>(
        &self,
        id: &EntityId,
        action: &str,
        dto: &D,
    ) -> Result<MutationOutcome> {
        let path = format!("{}/{action}", self.detail_path(id));
        let body = serde_json::to_value(dto)?;
        let value = self.transport.patch(&path, body).await?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Deletes an entity. Not idempotent: deleting an already-deleted id
    /// surfaces the server's error.
    pub async fn remove(&self, id: &EntityId) -> Result<MutationOutcome> {
        let value = self.transport.delete(&self.detail_path(id)).await?;
        serde_json::from_value(value).map_err(Into::into)
    }
}
