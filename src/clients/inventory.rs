//! Inventory resource client.
//!
//! Stock levels list at the base path; each product's transaction log is a
//! paginated sub-resource keyed by product id. Adjustments append to the log.

use crate::clients::resource::{ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::inventory::{InventoryAdjustment, InventoryLevel, InventoryTransaction};
use crate::errors::{Error, Result};
use crate::transport::Transport;
use std::sync::Arc;

const BASE: &str = "/inventory/admin";

/// Typed client for stock levels and transactions.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient,
}

impl InventoryClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, BASE),
        }
    }

    /// Fetches one page of stock levels. Filter with `low_stock=1` to see
    /// only rows under their threshold.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<InventoryLevel>> {
        self.inner.list(query).await
    }

    /// Records a manual stock adjustment.
    pub async fn adjust(
        &self,
        product_id: i64,
        delta: i64,
        reason: &str,
    ) -> Result<MutationOutcome> {
        if reason.trim().is_empty() {
            return Err(Error::Validation {
                field: "reason",
                message: "An adjustment needs a reason".to_string(),
            });
        }
        let dto = InventoryAdjustment {
            product_id,
            delta,
            reason: reason.trim().to_string(),
        };
        self.inner
            .create_at(&format!("{BASE}/adjust"), &dto)
            .await
    }

    /// Fetches one page of a product's transaction log.
    pub async fn list_transactions(
        &self,
        product_id: i64,
        query: &ListQuery,
    ) -> Result<Page<InventoryTransaction>> {
        let path = format!("{BASE}/{product_id}/transactions");
        self.inner.list_at(&path, query).await
    }
}
