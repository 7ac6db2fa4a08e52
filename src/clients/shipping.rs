//! Shipping configuration client: carriers, zones, rates, shipments.
//!
//! Four resource families under one roof, matching how the shipping screen
//! groups them. Rate lists filter by `carrierId` and `zoneId`.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::IntBool;
use crate::entities::shipping::{
    Carrier, CarrierDraft, Rate, RateDraft, Shipment, ShipmentStatus, Zone, ZoneDraft,
};
use crate::errors::{Error, Result};
use crate::transport::Transport;
use serde::Serialize;
use std::sync::Arc;

const CARRIERS: &str = "/shipping/admin/carriers";
const ZONES: &str = "/shipping/admin/zones";
const RATES: &str = "/shipping/admin/rates";
const SHIPMENTS: &str = "/shipping/admin/shipments";

#[derive(Serialize)]
struct ShipmentStatusPatch {
    status: ShipmentStatus,
}

/// Typed client for all shipping configuration resources.
#[derive(Clone)]
pub struct ShippingClient {
    carriers: ResourceClient,
    zones: ResourceClient,
    rates: ResourceClient,
    shipments: ResourceClient,
}

impl ShippingClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            carriers: ResourceClient::new(Arc::clone(&transport), CARRIERS, CARRIERS),
            zones: ResourceClient::new(Arc::clone(&transport), ZONES, ZONES),
            rates: ResourceClient::new(Arc::clone(&transport), RATES, RATES),
            shipments: ResourceClient::new(transport, SHIPMENTS, SHIPMENTS),
        }
    }

    // Carriers

    /// Fetches one page of carriers.
    pub async fn list_carriers(&self, query: &ListQuery) -> Result<Page<Carrier>> {
        self.carriers.list(query).await
    }

    /// Creates a carrier after presence checks.
    pub async fn create_carrier(&self, draft: &CarrierDraft) -> Result<MutationOutcome> {
        let name = draft.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(Error::Validation {
                field: "name",
                message: "Carrier name cannot be empty".to_string(),
            });
        }
        self.carriers.create(draft).await
    }

    /// Partially updates a carrier.
    pub async fn update_carrier(&self, id: i64, draft: &CarrierDraft) -> Result<MutationOutcome> {
        self.carriers.update(&EntityId::Num(id), draft).await
    }

    /// Flips the carrier's 0/1 active flag to the given value.
    pub async fn toggle_carrier(&self, id: i64, is_active: IntBool) -> Result<MutationOutcome> {
        let draft = CarrierDraft {
            is_active: Some(is_active),
            ..Default::default()
        };
        self.update_carrier(id, &draft).await
    }

    /// Deletes a carrier. Not idempotent.
    pub async fn remove_carrier(&self, id: i64) -> Result<MutationOutcome> {
        self.carriers.remove(&EntityId::Num(id)).await
    }

    // Zones

    /// Fetches one page of zones.
    pub async fn list_zones(&self, query: &ListQuery) -> Result<Page<Zone>> {
        self.zones.list(query).await
    }

    /// Creates a zone.
    pub async fn create_zone(&self, draft: &ZoneDraft) -> Result<MutationOutcome> {
        self.zones.create(draft).await
    }

    /// Partially updates a zone.
    pub async fn update_zone(&self, id: i64, draft: &ZoneDraft) -> Result<MutationOutcome> {
        self.zones.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a zone. Not idempotent.
    pub async fn remove_zone(&self, id: i64) -> Result<MutationOutcome> {
        self.zones.remove(&EntityId::Num(id)).await
    }

    // Rates

    /// Fetches one page of rates; filter with `carrierId` / `zoneId` keys.
    pub async fn list_rates(&self, query: &ListQuery) -> Result<Page<Rate>> {
        self.rates.list(query).await
    }

    /// Creates a rate after band sanity checks.
    pub async fn create_rate(&self, draft: &RateDraft) -> Result<MutationOutcome> {
        if let (Some(min), Some(max)) = (draft.min_weight, draft.max_weight)
            && max <= min
        {
            return Err(Error::Validation {
                field: "max_weight",
                message: "Weight band upper bound must exceed the lower bound".to_string(),
            });
        }
        self.rates.create(draft).await
    }

    /// Partially updates a rate.
    pub async fn update_rate(&self, id: i64, draft: &RateDraft) -> Result<MutationOutcome> {
        self.rates.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a rate. Not idempotent.
    pub async fn remove_rate(&self, id: i64) -> Result<MutationOutcome> {
        self.rates.remove(&EntityId::Num(id)).await
    }

    // Shipments

    /// Fetches one page of shipments.
    pub async fn list_shipments(&self, query: &ListQuery) -> Result<Page<Shipment>> {
        self.shipments.list(query).await
    }

    /// Moves a shipment to a new delivery status.
    pub async fn update_shipment_status(
        &self,
        id: i64,
        status: ShipmentStatus,
    ) -> Result<MutationOutcome> {
        self.shipments
            .patch_action(&EntityId::Num(id), "status", &ShipmentStatusPatch { status })
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{FakeApi, seed_rate};

    fn fixture() -> (Arc<FakeApi>, ShippingClient) {
        let api = FakeApi::new();
        for base in [CARRIERS, ZONES, RATES, SHIPMENTS] {
            api.mount(base, base);
        }
        let client = ShippingClient::new(Arc::clone(&api) as Arc<dyn Transport>);
        (api, client)
    }

    #[tokio::test]
    async fn test_rate_filters_by_carrier_and_zone() -> Result<()> {
        let (api, client) = fixture();
        seed_rate(&api, 1, 1);
        seed_rate(&api, 1, 2);
        seed_rate(&api, 2, 1);

        let page = client
            .list_rates(
                &ListQuery::new()
                    .with_filter("carrierId", 1)
                    .with_filter("zoneId", 2),
            )
            .await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].carrier_id, 1);
        assert_eq!(page.data[0].zone_id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_inverted_weight_band_rejected() {
        let (_api, client) = fixture();
        let draft = RateDraft {
            carrier_id: Some(1),
            zone_id: Some(1),
            min_weight: Some(5.0),
            max_weight: Some(2.0),
            price: Some("4.50".to_string()),
        };
        let result = client.create_rate(&draft).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation {
                field: "max_weight",
                ..
            }
        ));
    }
}
