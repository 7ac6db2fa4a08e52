//! Per-entity resource clients.
//!
//! Each client wraps one REST base path and exposes typed methods:
//! `list(query) -> Page<T>`, `get_by_id(id) -> T`, `create(dto)`,
//! `update(id, dto)`, `remove(id)`, plus entity-specific actions
//! (status toggles, order shipping updates, ...). Clients perform only
//! presence/format checks before sending; the server stays authoritative.

/// Generic REST resource abstraction (Page, ListQuery, ResourceClient)
pub mod resource;

/// Homepage banners
pub mod banners;
/// Product brands
pub mod brands;
/// Product categories
pub mod categories;
/// Dashboard summary stats
pub mod dashboard;
/// Flash sales
pub mod flash_sales;
/// Stock levels and transactions
pub mod inventory;
/// Customer orders
pub mod orders;
/// Blog posts
pub mod posts;
/// Products
pub mod products;
/// Carriers, zones, rates, shipments
pub mod shipping;
/// Admin user accounts
pub mod users;
/// Discount vouchers
pub mod vouchers;

pub use resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
