//! Product entity - the catalog's central record.
//!
//! Products carry their status as a string enum (`"active"` / `"inactive"`),
//! money as plain numbers, and summarize their category/brand by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product status as the server encodes it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible in the storefront
    Active,
    /// Hidden from the storefront
    Inactive,
}

/// Product record as returned by list and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: i64,
    /// Display name (e.g. "Whey Protein Isolate 2kg")
    pub name: String,
    /// URL slug derived from the name
    pub slug: String,
    /// Long-form description, absent in list rows
    #[serde(default)]
    pub description: Option<String>,
    /// Regular price
    pub price: f64,
    /// Discounted price, when on sale
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Wire status: `"active"` or `"inactive"`
    pub status: ProductStatus,
    /// Owning category, if assigned
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Owning brand, if assigned
    #[serde(default)]
    pub brand_id: Option<i64>,
    /// Primary image path (relative or absolute)
    #[serde(default)]
    pub image: Option<String>,
    /// Units in stock
    #[serde(default)]
    pub stock: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, if ever updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update dto. Unset fields are omitted from the JSON body, so an
/// update leaves them unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl Product {
    /// Copies the row's editable fields into a draft for the edit modal.
    /// The draft is fully decoupled from the row.
    #[must_use]
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            price: Some(self.price),
            sale_price: self.sale_price,
            status: Some(self.status),
            category_id: self.category_id,
            brand_id: self.brand_id,
            image: self.image.clone(),
            stock: Some(self.stock),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_status_wire_encoding() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::from_str::<ProductStatus>("\"inactive\"").unwrap(),
            ProductStatus::Inactive
        );
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = ProductDraft {
            price: Some(29.99),
            ..Default::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["price"], 29.99);
    }
}
