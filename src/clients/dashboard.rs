//! Dashboard client - a single summary fetch, no Page envelope, no mutations.

use crate::entities::dashboard::DashboardStats;
use crate::errors::Result;
use crate::transport::Transport;
use std::sync::Arc;

const STATS: &str = "/dashboard/admin/stats";

/// Typed client for the dashboard landing screen.
#[derive(Clone)]
pub struct DashboardClient {
    transport: Arc<dyn Transport>,
}

impl DashboardClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetches the aggregate numbers for the landing screen.
    pub async fn stats(&self) -> Result<DashboardStats> {
        let value = self.transport.get(STATS, &[]).await?;
        serde_json::from_value(value).map_err(Into::into)
    }
}
