//! Voucher (discount code) entity.
//!
//! Vouchers are the one family addressed by a string key (the code) on detail
//! fetches, and they return monetary amounts as decimal strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the voucher's value applies to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` is a percentage, constrained to [0, 100]
    Percentage,
    /// `discount_value` is a fixed amount, any non-negative value
    Fixed,
}

/// Voucher record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: i64,
    /// Redemption code customers type in (e.g. "SUMMER10")
    pub code: String,
    pub discount_type: DiscountType,
    /// Decimal string: a percentage or fixed amount depending on the type
    pub discount_value: String,
    /// Decimal string; order subtotal required before the code applies
    #[serde(default)]
    pub min_order_value: Option<String>,
    /// Decimal string; cap on the computed discount, percentage type only
    #[serde(default)]
    pub max_discount: Option<String>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    pub is_active: bool,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Create/update dto; unset fields stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VoucherDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Voucher {
    /// Copies the row's editable fields into a decoupled draft.
    #[must_use]
    pub fn draft(&self) -> VoucherDraft {
        VoucherDraft {
            code: Some(self.code.clone()),
            discount_type: Some(self.discount_type),
            discount_value: Some(self.discount_value.clone()),
            min_order_value: self.min_order_value.clone(),
            max_discount: self.max_discount.clone(),
            usage_limit: self.usage_limit,
            is_active: Some(self.is_active),
            starts_at: Some(self.starts_at),
            expires_at: self.expires_at,
        }
    }
}
