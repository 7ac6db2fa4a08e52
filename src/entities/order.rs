//! Order entity - customer orders with embedded line items.
//!
//! Orders return money as decimal strings to preserve precision, and their
//! status as a string enum. Line items are embedded in detail responses but
//! summarized as a count in list rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status as the server encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// One line item of an order. Created and deleted with its parent; never
/// addressed independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
    /// Decimal string, e.g. "29.99"
    pub unit_price: String,
    /// Decimal string: unit price times quantity
    pub line_total: String,
}

/// Order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Human-facing order code (e.g. "ORD-2024-0001")
    pub code: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    /// Decimal string
    pub subtotal: String,
    /// Decimal string
    pub shipping_fee: String,
    /// Decimal string
    pub total: String,
    /// Embedded in detail responses, empty in list rows
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Summary count, present in list rows
    #[serde(default)]
    pub item_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Shipping details patched onto an order via the dedicated shipping route.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShippingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<DateTime<Utc>>,
}
