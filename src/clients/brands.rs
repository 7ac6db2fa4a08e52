//! Brands resource client. List filters: `search`, `is_active`.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::brand::{Brand, BrandDraft};
use crate::errors::{Error, Result};
use crate::screen::ListResource;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;

const BASE: &str = "/brands/admin";

/// Typed client for product brands. Brands list at their base path.
#[derive(Clone)]
pub struct BrandsClient {
    inner: ResourceClient,
}

impl BrandsClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, BASE),
        }
    }

    /// Fetches one page of brands.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Brand>> {
        self.inner.list(query).await
    }

    /// Fetches one brand; a missing id surfaces as `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<Brand> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Creates a brand after presence checks.
    pub async fn create(&self, draft: &BrandDraft) -> Result<MutationOutcome> {
        validate_create(draft)?;
        self.inner.create(draft).await
    }

    /// Partially updates a brand.
    pub async fn update(&self, id: i64, draft: &BrandDraft) -> Result<MutationOutcome> {
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a brand. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Single-field active toggle.
    pub async fn toggle_active(&self, id: i64, is_active: bool) -> Result<MutationOutcome> {
        let draft = BrandDraft {
            is_active: Some(is_active),
            ..Default::default()
        };
        self.update(id, &draft).await
    }
}

fn validate_create(draft: &BrandDraft) -> Result<()> {
    let name = draft.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Brand name cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl ListResource for BrandsClient {
    type Item = Brand;
    type Draft = BrandDraft;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Brand>> {
        self.list(query).await
    }

    async fn create_item(&self, draft: &BrandDraft) -> Result<MutationOutcome> {
        self.create(draft).await
    }

    async fn update_item(&self, id: &EntityId, draft: &BrandDraft) -> Result<MutationOutcome> {
        self.inner.update(id, draft).await
    }

    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome> {
        self.inner.remove(id).await
    }

    fn id_of(item: &Brand) -> EntityId {
        EntityId::Num(item.id)
    }

    fn draft_of(item: &Brand) -> BrandDraft {
        item.draft()
    }

    fn validate_draft(draft: &BrandDraft) -> Result<()> {
        validate_create(draft)
    }
}
