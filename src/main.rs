//! Connectivity smoke binary: loads configuration, authenticates from the
//! environment if a token is set, and fetches the dashboard stats.

use admin_console_client::clients::dashboard::DashboardClient;
use admin_console_client::config;
use admin_console_client::errors::Result;
use admin_console_client::session::SessionStore;
use admin_console_client::transport::HttpTransport;
use dotenvy::dotenv;
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!(base_url = %app_config.api.base_url, "Loaded application configuration.");

    // 4. Set up the session and transport
    let session = Arc::new(SessionStore::new());
    if let Ok(token) = env::var("ADMIN_API_TOKEN") {
        session.set_token(token).await;
        info!("Using token from ADMIN_API_TOKEN.");
    }
    let transport = Arc::new(HttpTransport::new(&app_config.api, session)?);

    // 5. Fetch the dashboard stats as a connectivity check
    let dashboard = DashboardClient::new(transport);
    let stats = dashboard
        .stats()
        .await
        .inspect_err(|e| error!("Failed to fetch dashboard stats: {e}"))?;
    info!(
        products = stats.total_products,
        orders = stats.total_orders,
        revenue = %stats.total_revenue,
        "Dashboard stats fetched."
    );

    Ok(())
}
