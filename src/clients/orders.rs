//! Orders resource client.
//!
//! Orders are never created from the admin console; the client exposes list,
//! detail, the PATCH sub-routes for status and shipping info, cancellation,
//! and deletion. List filters: `search`, `status`.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::order::{Order, OrderStatus, ShippingInfo};
use crate::errors::Result;
use crate::transport::Transport;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

const BASE: &str = "/api/orders/admin";
const LIST: &str = "/api/orders/admin/list/all";

#[derive(Serialize)]
struct StatusPatch {
    status: OrderStatus,
}

/// Typed client for customer orders.
#[derive(Clone)]
pub struct OrdersClient {
    inner: ResourceClient,
}

impl OrdersClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, LIST),
        }
    }

    /// Fetches one page of orders (items summarized as counts).
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Order>> {
        self.inner.list(query).await
    }

    /// Fetches one order with its embedded line items.
    pub async fn get_by_id(&self, id: i64) -> Result<Order> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Moves the order to a new status via `PATCH .../:id/status`.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Result<MutationOutcome> {
        self.inner
            .patch_action(&EntityId::Num(id), "status", &StatusPatch { status })
            .await
    }

    /// Records carrier/tracking details via `PATCH .../:id/shipping`.
    pub async fn update_shipping(&self, id: i64, info: &ShippingInfo) -> Result<MutationOutcome> {
        self.inner
            .patch_action(&EntityId::Num(id), "shipping", info)
            .await
    }

    /// Cancels the order (a status move, kept as its own method so screens
    /// never hand-build the dto).
    pub async fn cancel(&self, id: i64) -> Result<MutationOutcome> {
        self.update_status(id, OrderStatus::Cancelled).await
    }

    /// Deletes an order. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }
}

/// Read-mostly list surface for order screens: creation is unsupported, edit
/// drafts are shipping-info patches.
#[async_trait]
impl crate::screen::ListResource for OrdersClient {
    type Item = Order;
    type Draft = ShippingInfo;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Order>> {
        self.list(query).await
    }

    async fn create_item(&self, _draft: &ShippingInfo) -> Result<MutationOutcome> {
        Err(crate::errors::Error::Validation {
            field: "order",
            message: "Orders cannot be created from the admin console".to_string(),
        })
    }

    async fn update_item(&self, id: &EntityId, draft: &ShippingInfo) -> Result<MutationOutcome> {
        self.inner.patch_action(id, "shipping", draft).await
    }

    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome> {
        self.inner.remove(id).await
    }

    fn id_of(item: &Order) -> EntityId {
        EntityId::Num(item.id)
    }

    fn draft_of(_item: &Order) -> ShippingInfo {
        ShippingInfo::default()
    }

    fn validate_draft(_draft: &ShippingInfo) -> Result<()> {
        Ok(())
    }
}
