//! Shipping configuration entities: carriers, zones, rates, shipments.
//!
//! Carriers use the 0/1 integer active flag; rates return their price as a
//! decimal string.

use crate::entities::IntBool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shipping carrier record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub id: i64,
    pub name: String,
    /// Short code used in tracking URLs (e.g. "ghn", "viettel")
    pub code: String,
    /// Wire encoding is `0` or `1`
    pub is_active: IntBool,
    pub created_at: DateTime<Utc>,
}

/// Geographic shipping zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    /// Region/province codes covered by this zone
    #[serde(default)]
    pub regions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Weight-banded rate for a carrier within a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub id: i64,
    pub carrier_id: i64,
    pub zone_id: i64,
    /// Band lower bound, kilograms
    pub min_weight: f64,
    /// Band upper bound, kilograms
    pub max_weight: f64,
    /// Decimal string
    pub price: String,
    pub created_at: DateTime<Utc>,
}

/// Delivery status of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Delivered,
    Returned,
}

/// Shipment record tied to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: i64,
    pub order_id: i64,
    pub carrier_id: i64,
    #[serde(default)]
    pub tracking_number: Option<String>,
    pub status: ShipmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Carrier create/update dto.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CarrierDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<IntBool>,
}

/// Zone create/update dto.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZoneDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

/// Rate create/update dto.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Carrier {
    /// Copies the row's editable fields into a decoupled draft.
    #[must_use]
    pub fn draft(&self) -> CarrierDraft {
        CarrierDraft {
            name: Some(self.name.clone()),
            code: Some(self.code.clone()),
            is_active: Some(self.is_active),
        }
    }
}
