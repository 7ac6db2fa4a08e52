//! Flash sale entity and its product line-up.
//!
//! The line-up is embedded in detail responses, summarized as a count in list
//! rows, and also exposed as its own paginated sub-resource keyed by sale id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flash sale record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashSale {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Summary count, present in list rows
    #[serde(default)]
    pub product_count: u64,
    pub created_at: DateTime<Utc>,
}

/// One product enrolled in a flash sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashSaleProduct {
    pub id: i64,
    pub flash_sale_id: i64,
    pub product_id: i64,
    pub product_name: String,
    /// Sale price while the flash sale runs
    pub sale_price: f64,
    #[serde(default)]
    pub quantity_limit: Option<u32>,
}

/// Create/update dto; unset fields stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlashSaleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl FlashSale {
    /// Copies the row's editable fields into a decoupled draft.
    #[must_use]
    pub fn draft(&self) -> FlashSaleDraft {
        FlashSaleDraft {
            name: Some(self.name.clone()),
            is_active: Some(self.is_active),
            starts_at: Some(self.starts_at),
            ends_at: Some(self.ends_at),
        }
    }
}
