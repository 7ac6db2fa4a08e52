//! Wire-format entity records.
//!
//! One module per entity family. Status is modeled inconsistently across the
//! server's entities - a JSON boolean here, a 0/1 integer there, a string enum
//! elsewhere - and each module preserves its entity's literal wire encoding
//! rather than unifying them, since toggle logic branches on the exact shape.
//! The 0/1 integer encoding is isolated behind [`IntBool`].

/// Homepage banners
pub mod banner;
/// Product brands
pub mod brand;
/// Product categories
pub mod category;
/// Dashboard summary stats
pub mod dashboard;
/// Flash sales and their product line-ups
pub mod flash_sale;
/// Stock levels and inventory transactions
pub mod inventory;
/// Customer orders and order items
pub mod order;
/// Blog posts
pub mod post;
/// Products
pub mod product;
/// Shipping carriers, zones, rates, and shipments
pub mod shipping;
/// Admin user accounts
pub mod user;
/// Discount vouchers
pub mod voucher;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A boolean that crosses the wire as the integer `0` or `1`.
///
/// Categories and shipping carriers encode their active flag this way; keeping
/// the adapter here means nothing else in the crate has to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntBool(pub bool);

impl IntBool {
    /// The flipped flag, for toggle actions.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self(!self.0)
    }
}

impl From<bool> for IntBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl Serialize for IntBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.0))
    }
}

impl<'de> Deserialize<'de> for IntBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self(raw != 0))
    }
}
