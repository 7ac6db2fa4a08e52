//! Vouchers (discount codes) resource client.
//!
//! Detail fetches are keyed by the code string; update and delete use the
//! numeric id. Percentage-type values are bounded to [0, 100] client-side;
//! fixed-type values only need to be non-negative.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::voucher::{DiscountType, Voucher, VoucherDraft};
use crate::errors::{Error, Result};
use crate::screen::ListResource;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;

const BASE: &str = "/discount-codes";

/// Typed client for discount vouchers.
#[derive(Clone)]
pub struct VouchersClient {
    inner: ResourceClient,
}

impl VouchersClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, BASE),
        }
    }

    /// Fetches one page of vouchers.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Voucher>> {
        self.inner.list(query).await
    }

    /// Fetches one voucher by its redemption code.
    pub async fn get_by_code(&self, code: &str) -> Result<Voucher> {
        self.inner.get_by_id(&EntityId::from(code)).await
    }

    /// Creates a voucher after presence and bound checks.
    pub async fn create(&self, draft: &VoucherDraft) -> Result<MutationOutcome> {
        validate(draft, true)?;
        self.inner.create(draft).await
    }

    /// Partially updates a voucher; bound checks apply to whatever discount
    /// fields the draft sets.
    pub async fn update(&self, id: i64, draft: &VoucherDraft) -> Result<MutationOutcome> {
        validate(draft, false)?;
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a voucher. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Single-field active toggle.
    pub async fn toggle_active(&self, id: i64, is_active: bool) -> Result<MutationOutcome> {
        let draft = VoucherDraft {
            is_active: Some(is_active),
            ..Default::default()
        };
        self.inner.update(&EntityId::Num(id), &draft).await
    }
}

fn validate(draft: &VoucherDraft, for_create: bool) -> Result<()> {
    if for_create {
        let code = draft.code.as_deref().map(str::trim).unwrap_or_default();
        if code.is_empty() {
            return Err(Error::Validation {
                field: "code",
                message: "Voucher code cannot be empty".to_string(),
            });
        }
    }

    if let Some(raw) = &draft.discount_value {
        let value: f64 = raw.trim().parse().map_err(|_| Error::Validation {
            field: "discount_value",
            message: format!("Not a decimal number: {raw}"),
        })?;
        if value < 0.0 {
            return Err(Error::Validation {
                field: "discount_value",
                message: "Discount value cannot be negative".to_string(),
            });
        }
        // Percentage values are constrained to [0, 100]; fixed amounts are not
        if draft.discount_type == Some(DiscountType::Percentage) && value > 100.0 {
            return Err(Error::Validation {
                field: "discount_value",
                message: format!("Percentage discount must be within [0, 100], got {value}"),
            });
        }
    }

    if let (Some(starts), Some(expires)) = (draft.starts_at, draft.expires_at)
        && expires <= starts
    {
        return Err(Error::Validation {
            field: "expires_at",
            message: "Expiry must be after the start date".to_string(),
        });
    }

    Ok(())
}

#[async_trait]
impl ListResource for VouchersClient {
    type Item = Voucher;
    type Draft = VoucherDraft;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<Voucher>> {
        self.list(query).await
    }

    async fn create_item(&self, draft: &VoucherDraft) -> Result<MutationOutcome> {
        self.create(draft).await
    }

    async fn update_item(&self, id: &EntityId, draft: &VoucherDraft) -> Result<MutationOutcome> {
        validate(draft, false)?;
        self.inner.update(id, draft).await
    }

    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome> {
        self.inner.remove(id).await
    }

    fn id_of(item: &Voucher) -> EntityId {
        EntityId::Num(item.id)
    }

    fn draft_of(item: &Voucher) -> VoucherDraft {
        item.draft()
    }

    fn validate_draft(draft: &VoucherDraft) -> Result<()> {
        validate(draft, true)
    }
}
