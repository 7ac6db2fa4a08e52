//! Banners resource client. List filters: `search`, `position`, `is_active`.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::banner::{Banner, BannerDraft};
use crate::errors::{Error, Result};
use crate::screen::ListResource;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;

const BASE: &str = "/banners/admin";
const LIST: &str = "/banners/admin/list";

/// Typed client for homepage banners.
#[derive(Clone)]
pub struct BannersClient {
    inner: ResourceClient,
}

impl BannersClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, LIST),
        }
    }

    /// Fetches one page of banners.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Banner>> {
        self.inner.list(query).await
    }

    /// Fetches one banner; a missing id surfaces as `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<Banner> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Creates a banner after presence checks.
    pub async fn create(&self, draft: &BannerDraft) -> Result<MutationOutcome> {
        validate_create(draft)?;
        self.inner.create(draft).await
    }

    /// Partially updates a banner.
    pub async fn update(&self, id: i64, draft: &BannerDraft) -> Result<MutationOutcome> {
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a banner. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Fetches the current flag and writes back its inverse. One click in the
    /// table, no confirmation modal.
    pub async fn toggle_active(&self, id: i64) -> Result<MutationOutcome> {
        let current = self.get_by_id(id).await?;
        let draft = BannerDraft {
            is_active: Some(!current.is_active),
            ..Default::default()
        };
        self.update(id, &draft).await
    }
}

fn validate_create(draft: &BannerDraft) -> Result<()> {
    let name = draft.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Banner name cannot be empty".to_string(),
        });
    }
    if let Some(position) = draft.position
        && position < 1
    {
        return Err(Error::Validation {
            field: "position",
            message: "Position is 1-indexed".to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl ListResource for BannersClient {
    type Item = Banner;
    type Draft = BannerDraft;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Banner>> {
        self.list(query).await
    }

    async fn create_item(&self, draft: &BannerDraft) -> Result<MutationOutcome> {
        self.create(draft).await
    }

    async fn update_item(&self, id: &EntityId, draft: &BannerDraft) -> Result<MutationOutcome> {
        self.inner.update(id, draft).await
    }

    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome> {
        self.inner.remove(id).await
    }

    fn id_of(item: &Banner) -> EntityId {
        EntityId::Num(item.id)
    }

    fn draft_of(item: &Banner) -> BannerDraft {
        item.draft()
    }

    fn validate_draft(draft: &BannerDraft) -> Result<()> {
        validate_create(draft)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::banners_fixture;

    /// Full lifecycle: create, find via position filter, toggle, delete,
    /// then a detail fetch fails.
    #[tokio::test]
    async fn test_banner_lifecycle() -> Result<()> {
        let (_api, client) = banners_fixture();

        let draft = BannerDraft {
            name: Some("Tết Sale".to_string()),
            image: Some("/uploads/tet.jpg".to_string()),
            position: Some(1),
            is_active: Some(true),
            ..Default::default()
        };
        let outcome = client.create(&draft).await?;
        assert!(!outcome.message.is_empty());
        let id = outcome.data.unwrap()["id"].as_i64().unwrap();

        let page = client
            .list(&ListQuery::new().with_filter("position", 1))
            .await?;
        assert!(page.data.iter().any(|b| b.id == id && b.name == "Tết Sale"));

        client.toggle_active(id).await?;
        assert!(!client.get_by_id(id).await?.is_active);

        client.remove(id).await?;
        let gone = client.get_by_id(id).await;
        assert!(matches!(gone.unwrap_err(), Error::NotFound { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let (api, client) = banners_fixture();
        let result = client.create(&BannerDraft::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { field: "name", .. }
        ));
        assert_eq!(api.request_count(), 0);
    }
}
