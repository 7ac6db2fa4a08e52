//! Products resource client.
//!
//! List filters: `search`, `status`, `category_id`, `brand_id`.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::product::{Product, ProductDraft, ProductStatus};
use crate::errors::{Error, Result};
use crate::screen::ListResource;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;

const BASE: &str = "/products/admin";
const LIST: &str = "/products/admin/list";

/// Typed client for the product catalog.
#[derive(Clone)]
pub struct ProductsClient {
    inner: ResourceClient,
}

impl ProductsClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, LIST),
        }
    }

    /// Fetches one page of products.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Product>> {
        self.inner.list(query).await
    }

    /// Fetches one product; a missing id surfaces as `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<Product> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Creates a product after presence checks on the draft.
    pub async fn create(&self, draft: &ProductDraft) -> Result<MutationOutcome> {
        validate_create(draft)?;
        self.inner.create(draft).await
    }

    /// Partially updates a product; unset draft fields stay unchanged.
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> Result<MutationOutcome> {
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a product. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Single-field status mutation, so screens never hand-build the dto.
    pub async fn set_status(&self, id: i64, status: ProductStatus) -> Result<MutationOutcome> {
        let draft = ProductDraft {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, &draft).await
    }
}

fn validate_create(draft: &ProductDraft) -> Result<()> {
    let name = draft.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Product name cannot be empty".to_string(),
        });
    }
    if let Some(price) = draft.price
        && !(price >= 0.0)
    {
        return Err(Error::Validation {
            field: "price",
            message: format!("Price must be a non-negative number, got {price}"),
        });
    }
    Ok(())
}

#[async_trait]
impl ListResource for ProductsClient {
    type Item = Product;
    type Draft = ProductDraft;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Product>> {
        self.list(query).await
    }

    async fn create_item(&self, draft: &ProductDraft) -> Result<MutationOutcome> {
        self.create(draft).await
    }

    async fn update_item(&self, id: &EntityId, draft: &ProductDraft) -> Result<MutationOutcome> {
        self.inner.update(id, draft).await
    }

    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome> {
        self.inner.remove(id).await
    }

    fn id_of(item: &Product) -> EntityId {
        EntityId::Num(item.id)
    }

    fn draft_of(item: &Product) -> ProductDraft {
        item.draft()
    }

    fn validate_draft(draft: &ProductDraft) -> Result<()> {
        validate_create(draft)
    }
}
