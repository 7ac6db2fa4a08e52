//! Categories resource client. List filters: `search`, `is_active`.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::IntBool;
use crate::entities::category::{Category, CategoryDraft};
use crate::errors::{Error, Result};
use crate::screen::ListResource;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;

const BASE: &str = "/categories/admin";
const LIST: &str = "/categories/admin/list/all";

/// Typed client for product categories.
#[derive(Clone)]
pub struct CategoriesClient {
    inner: ResourceClient,
}

impl CategoriesClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, LIST),
        }
    }

    /// Fetches one page of categories.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Category>> {
        self.inner.list(query).await
    }

    /// Fetches one category; a missing id surfaces as `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<Category> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Creates a category after presence checks.
    pub async fn create(&self, draft: &CategoryDraft) -> Result<MutationOutcome> {
        validate_create(draft)?;
        self.inner.create(draft).await
    }

    /// Partially updates a category.
    pub async fn update(&self, id: i64, draft: &CategoryDraft) -> Result<MutationOutcome> {
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a category. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Flips the 0/1 active flag to the given value.
    pub async fn toggle_active(&self, id: i64, is_active: IntBool) -> Result<MutationOutcome> {
        let draft = CategoryDraft {
            is_active: Some(is_active),
            ..Default::default()
        };
        self.update(id, &draft).await
    }
}

fn validate_create(draft: &CategoryDraft) -> Result<()> {
    let name = draft.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Category name cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl ListResource for CategoriesClient {
    type Item = Category;
    type Draft = CategoryDraft;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Category>> {
        self.list(query).await
    }

    async fn create_item(&self, draft: &CategoryDraft) -> Result<MutationOutcome> {
        self.create(draft).await
    }

    async fn update_item(&self, id: &EntityId, draft: &CategoryDraft) -> Result<MutationOutcome> {
        self.inner.update(id, draft).await
    }

    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome> {
        self.inner.remove(id).await
    }

    fn id_of(item: &Category) -> EntityId {
        EntityId::Num(item.id)
    }

    fn draft_of(item: &Category) -> CategoryDraft {
        item.draft()
    }

    fn validate_draft(draft: &CategoryDraft) -> Result<()> {
        validate_create(draft)
    }
}
