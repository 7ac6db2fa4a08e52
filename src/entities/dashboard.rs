//! Dashboard summary stats. The one read-only family without a Page envelope.

use crate::entities::order::Order;
use serde::{Deserialize, Serialize};

/// Aggregate numbers shown on the dashboard landing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orders: u64,
    /// Decimal string, like all order money
    pub total_revenue: String,
    pub total_products: u64,
    pub total_users: u64,
    /// Most recent orders, server-chosen count
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}
