//! Inventory entities: per-product stock levels and their transaction log.
//!
//! Transactions are the one child collection paginated at its own endpoint
//! (keyed by product id) rather than embedded in the parent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current stock level of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLevel {
    pub product_id: i64,
    pub product_name: String,
    /// Units on hand; may go negative on oversell
    pub quantity: i64,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One stock movement, append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: i64,
    pub product_id: i64,
    /// Signed quantity change (negative for outbound)
    pub delta: i64,
    /// Free-text reason ("restock", "damaged", "order #123", ...)
    pub reason: String,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Dto for a manual stock adjustment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryAdjustment {
    pub product_id: i64,
    pub delta: i64,
    pub reason: String,
}
