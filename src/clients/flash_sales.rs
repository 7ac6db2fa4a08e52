//! Flash sales resource client.
//!
//! Besides the usual CRUD, the product line-up of a sale is a paginated
//! sub-resource keyed by the parent sale id.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::flash_sale::{FlashSale, FlashSaleDraft, FlashSaleProduct};
use crate::errors::{Error, Result};
use crate::transport::Transport;
use std::sync::Arc;

const BASE: &str = "/flash-sales/admin";
const LIST: &str = "/flash-sales/admin/list";

/// Typed client for flash sales.
#[derive(Clone)]
pub struct FlashSalesClient {
    inner: ResourceClient,
}

impl FlashSalesClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, LIST),
        }
    }

    /// Fetches one page of flash sales.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<FlashSale>> {
        self.inner.list(query).await
    }

    /// Fetches one sale; a missing id surfaces as `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<FlashSale> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Creates a sale after presence and date-range checks.
    pub async fn create(&self, draft: &FlashSaleDraft) -> Result<MutationOutcome> {
        validate(draft)?;
        self.inner.create(draft).await
    }

    /// Partially updates a sale.
    pub async fn update(&self, id: i64, draft: &FlashSaleDraft) -> Result<MutationOutcome> {
        validate(draft)?;
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a sale (line-up cascades with it). Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Single-field active toggle.
    pub async fn toggle_active(&self, id: i64, is_active: bool) -> Result<MutationOutcome> {
        let draft = FlashSaleDraft {
            is_active: Some(is_active),
            ..Default::default()
        };
        self.inner.update(&EntityId::Num(id), &draft).await
    }

    /// Fetches one page of the sale's product line-up.
    pub async fn list_products(
        &self,
        sale_id: i64,
        query: &ListQuery,
    ) -> Result<Page<FlashSaleProduct>> {
        let path = format!("{BASE}/{sale_id}/products");
        self.inner.list_at(&path, query).await
    }
}

fn validate(draft: &FlashSaleDraft) -> Result<()> {
    if let (Some(starts), Some(ends)) = (draft.starts_at, draft.ends_at)
        && ends <= starts
    {
        return Err(Error::Validation {
            field: "ends_at",
            message: "End must be after the start".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{FakeApi, seed_flash_sale_product};
    use chrono::{Duration, Utc};

    fn fixture() -> (Arc<FakeApi>, FlashSalesClient) {
        let api = FakeApi::new();
        api.mount(BASE, LIST);
        let client = FlashSalesClient::new(Arc::clone(&api) as Arc<dyn Transport>);
        (api, client)
    }

    #[tokio::test]
    async fn test_end_before_start_rejected() {
        let (_api, client) = fixture();
        let now = Utc::now();
        let draft = FlashSaleDraft {
            name: Some("Flash".to_string()),
            starts_at: Some(now),
            ends_at: Some(now - Duration::hours(1)),
            ..Default::default()
        };
        let result = client.create(&draft).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation {
                field: "ends_at",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_product_lineup_is_paginated_sub_resource() -> Result<()> {
        let (api, client) = fixture();
        let lineup_path = format!("{BASE}/5/products");
        api.mount(&lineup_path, &lineup_path);
        for i in 0..7 {
            seed_flash_sale_product(&api, &lineup_path, 5, 100 + i);
        }

        let page = client
            .list_products(5, &ListQuery::new().with_page(2).with_limit(5))
            .await?;
        assert_eq!(page.total, 7);
        assert_eq!(page.data.len(), 2);
        assert!(page.data.iter().all(|p| p.flash_sale_id == 5));
        Ok(())
    }
}
