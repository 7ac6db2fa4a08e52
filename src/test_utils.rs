//! Shared test utilities.
//!
//! [`FakeApi`] is an in-memory stand-in for the admin API: it implements
//! [`Transport`] over mutable JSON collections, mirroring the server's
//! pagination envelope, partial-update semantics, and error contract. Seed
//! helpers create test entities with sensible defaults.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::clients::banners::BannersClient;
use crate::clients::categories::CategoriesClient;
use crate::clients::orders::OrdersClient;
use crate::clients::products::ProductsClient;
use crate::clients::users::UsersClient;
use crate::clients::vouchers::VouchersClient;
use crate::entities::post::slugify;
use crate::errors::{Error, Result};
use crate::transport::{FilePart, Transport, error_from_response};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value, json};
use std::sync::{Arc, Mutex};

/// One request as the fake saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

struct Collection {
    base: String,
    list_path: String,
    /// Server-side column defaults applied to inserts
    defaults: Map<String, Value>,
    rows: Vec<Value>,
}

struct State {
    collections: Vec<Collection>,
    /// Non-standard create routes mapped to their collection base
    create_aliases: Vec<(String, String)>,
    calls: Vec<RecordedCall>,
    next_id: i64,
    next_upload: u64,
    forced_error: Option<(u16, String)>,
}

/// In-memory admin API double.
pub struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    /// Creates an empty fake with no collections mounted.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State {
                collections: Vec::new(),
                create_aliases: Vec::new(),
                calls: Vec::new(),
                next_id: 1,
                next_upload: 1,
                forced_error: None,
            }),
        })
    }

    /// Mounts a collection at `base`, listing at `list_path`.
    pub fn mount(&self, base: &str, list_path: &str) {
        self.mount_with_defaults(base, list_path, Value::Null);
    }

    /// Mounts a collection whose inserts get the given column defaults for
    /// keys the request body leaves out.
    pub fn mount_with_defaults(&self, base: &str, list_path: &str, defaults: Value) {
        let defaults = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.state.lock().unwrap().collections.push(Collection {
            base: base.to_string(),
            list_path: list_path.to_string(),
            defaults,
            rows: Vec::new(),
        });
    }

    /// Routes POSTs on `alias` to the collection at `base`.
    pub fn mount_create_alias(&self, alias: &str, base: &str) {
        self.state
            .lock()
            .unwrap()
            .create_aliases
            .push((alias.to_string(), base.to_string()));
    }

    /// Inserts a row directly, bypassing the transport (and the call log).
    /// Returns the assigned id.
    pub fn seed(&self, base: &str, row: Value) -> i64 {
        let mut state = self.state.lock().unwrap();
        let row = state.fill_row(base, row);
        let id = row["id"].as_i64().unwrap();
        state.collection_mut(base).rows.push(row);
        id
    }

    /// Snapshot of a collection's rows.
    pub fn rows(&self, base: &str) -> Vec<Value> {
        self.state.lock().unwrap().collection_mut(base).rows.clone()
    }

    /// Every request the fake has served, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of requests served so far.
    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Makes the next request fail with the given status and message.
    pub fn fail_next(&self, status: u16, message: &str) {
        self.state.lock().unwrap().forced_error = Some((status, message.to_string()));
    }

    fn record(
        &self,
        method: &str,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            query: query.to_vec(),
            body: body.cloned(),
        });
        if let Some((status, message)) = state.forced_error.take() {
            let body = json!({ "message": message }).to_string();
            return Err(error_from_response(status, path, &body));
        }
        Ok(())
    }
}

impl State {
    fn collection_mut(&mut self, base: &str) -> &mut Collection {
        self.collections
            .iter_mut()
            .find(|c| c.base == base)
            .expect("collection not mounted")
    }

    /// Applies column defaults and server-assigned fields to an insert.
    fn fill_row(&mut self, base: &str, row: Value) -> Value {
        let mut merged = self.collection_mut(base).defaults.clone();
        if let Value::Object(body) = row {
            for (key, value) in body {
                merged.insert(key, value);
            }
        }
        if !merged.contains_key("id") {
            merged.insert("id".to_string(), json!(self.next_id));
            self.next_id += 1;
        }
        if !merged.contains_key("created_at") {
            merged.insert("created_at".to_string(), json!(Utc::now().to_rfc3339()));
        }
        if !merged.contains_key("slug") {
            let source = merged
                .get("name")
                .or_else(|| merged.get("title"))
                .and_then(Value::as_str);
            if let Some(source) = source {
                merged.insert("slug".to_string(), json!(slugify(source)));
            }
        }
        Value::Object(merged)
    }

    /// Longest mounted base that `path` nests under, with the remainder.
    fn resolve<'a>(&self, path: &'a str) -> Option<(String, &'a str)> {
        self.collections
            .iter()
            .filter_map(|c| {
                path.strip_prefix(c.base.as_str())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(|rest| (c.base.clone(), rest))
            })
            .max_by_key(|(base, _)| base.len())
    }

    fn row_position(rows: &[Value], segment: &str) -> Option<usize> {
        if let Ok(id) = segment.parse::<i64>() {
            rows.iter().position(|r| r["id"] == json!(id))
        } else {
            rows.iter().position(|r| r["code"] == json!(segment))
        }
    }
}

/// Filter keys arrive in the route's own casing (e.g. `carrierId`); rows
/// store snake_case fields.
fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn field_as_string(row: &Value, key: &str) -> Option<String> {
    let value = row.get(key).or_else(|| row.get(snake_case(key)))?;
    Some(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn matches_search(row: &Value, term: &str) -> bool {
    let term = term.to_lowercase();
    ["name", "title"].iter().any(|key| {
        row.get(*key)
            .and_then(Value::as_str)
            .is_some_and(|v| v.to_lowercase().contains(&term))
    })
}

fn paginate(rows: &[Value], query: &[(String, String)]) -> Value {
    let mut page: u32 = 1;
    let mut limit: u32 = 10;
    let mut filters: Vec<(&str, &str)> = Vec::new();
    let mut search: Option<&str> = None;

    for (key, value) in query {
        match key.as_str() {
            "page" => page = value.parse().unwrap_or(1),
            "limit" => limit = value.parse().unwrap_or(10),
            "search" => search = Some(value),
            _ => filters.push((key, value)),
        }
    }

    let filtered: Vec<&Value> = rows
        .iter()
        .filter(|row| search.is_none_or(|term| matches_search(row, term)))
        .filter(|row| {
            filters
                .iter()
                .all(|(key, value)| field_as_string(row, key).as_deref() == Some(value))
        })
        .collect();

    let total = filtered.len() as u64;
    let pages = (total.div_ceil(u64::from(limit.max(1))) as u32).max(1);
    let start = (page.saturating_sub(1) * limit) as usize;
    let data: Vec<Value> = filtered
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    json!({
        "data": data,
        "total": total,
        "page": page,
        "limit": limit,
        "pages": pages,
    })
}

#[async_trait]
impl Transport for FakeApi {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.record("GET", path, query, None)?;
        let mut state = self.state.lock().unwrap();

        if let Some(collection) = state.collections.iter().find(|c| c.list_path == path) {
            return Ok(paginate(&collection.rows, query));
        }

        if let Some((base, segment)) = state.resolve(path)
            && !segment.contains('/')
        {
            let rows = &state.collection_mut(&base).rows;
            if let Some(pos) = State::row_position(rows, segment) {
                return Ok(rows[pos].clone());
            }
        }
        Err(Error::NotFound {
            path: path.to_string(),
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.record("POST", path, &[], Some(&body))?;
        let mut state = self.state.lock().unwrap();

        let base = state
            .create_aliases
            .iter()
            .find(|(alias, _)| alias == path)
            .map(|(_, base)| base.clone())
            .or_else(|| {
                state
                    .collections
                    .iter()
                    .find(|c| c.base == path)
                    .map(|c| c.base.clone())
            })
            .ok_or_else(|| Error::NotFound {
                path: path.to_string(),
            })?;

        let row = state.fill_row(&base, body);
        state.collection_mut(&base).rows.push(row.clone());
        Ok(json!({ "message": "created", "data": row }))
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.record("PUT", path, &[], Some(&body))?;
        let mut state = self.state.lock().unwrap();

        let (base, segment) = state.resolve(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;
        let rows = &mut state.collection_mut(&base).rows;
        let pos = State::row_position(rows, segment).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;

        // Partial update: only keys present in the body change
        if let (Value::Object(row), Value::Object(changes)) = (&mut rows[pos], body) {
            for (key, value) in changes {
                row.insert(key, value);
            }
        }
        Ok(json!({ "message": "updated", "data": rows[pos].clone() }))
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.record("PATCH", path, &[], Some(&body))?;
        let mut state = self.state.lock().unwrap();

        let (base, rest) = state.resolve(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;
        let segment = rest.split('/').next().unwrap_or(rest);
        let rows = &mut state.collection_mut(&base).rows;
        let pos = State::row_position(rows, segment).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;

        if let (Value::Object(row), Value::Object(changes)) = (&mut rows[pos], body) {
            for (key, value) in changes {
                row.insert(key, value);
            }
        }
        Ok(json!({ "message": "updated", "data": rows[pos].clone() }))
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.record("DELETE", path, &[], None)?;
        let mut state = self.state.lock().unwrap();

        let (base, segment) = state.resolve(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;
        let rows = &mut state.collection_mut(&base).rows;
        let pos = State::row_position(rows, segment).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;
        rows.remove(pos);
        Ok(json!({ "message": "deleted" }))
    }

    async fn post_form(&self, path: &str, _parts: Vec<FilePart>) -> Result<Value> {
        self.record("POST", path, &[], None)?;
        let mut state = self.state.lock().unwrap();
        let url = format!("/uploads/img_{}.jpg", state.next_upload);
        state.next_upload += 1;
        Ok(json!({ "url": url }))
    }
}

// Fixtures: a mounted fake plus the typed client over it.

pub fn products_fixture() -> (Arc<FakeApi>, ProductsClient) {
    let api = FakeApi::new();
    api.mount_with_defaults(
        "/products/admin",
        "/products/admin/list",
        json!({ "status": "active", "stock": 0, "price": 0.0 }),
    );
    let client = ProductsClient::new(Arc::clone(&api) as Arc<dyn Transport>);
    (api, client)
}

pub fn categories_fixture() -> (Arc<FakeApi>, CategoriesClient) {
    let api = FakeApi::new();
    api.mount_with_defaults(
        "/categories/admin",
        "/categories/admin/list/all",
        json!({ "is_active": 1, "product_count": 0 }),
    );
    let client = CategoriesClient::new(Arc::clone(&api) as Arc<dyn Transport>);
    (api, client)
}

pub fn banners_fixture() -> (Arc<FakeApi>, BannersClient) {
    let api = FakeApi::new();
    api.mount_with_defaults(
        "/banners/admin",
        "/banners/admin/list",
        json!({ "is_active": true, "position": 1 }),
    );
    let client = BannersClient::new(Arc::clone(&api) as Arc<dyn Transport>);
    (api, client)
}

pub fn vouchers_fixture() -> (Arc<FakeApi>, VouchersClient) {
    let api = FakeApi::new();
    api.mount_with_defaults(
        "/discount-codes",
        "/discount-codes",
        json!({ "is_active": true, "used_count": 0 }),
    );
    let client = VouchersClient::new(Arc::clone(&api) as Arc<dyn Transport>);
    (api, client)
}

pub fn orders_fixture() -> (Arc<FakeApi>, OrdersClient) {
    let api = FakeApi::new();
    api.mount("/api/orders/admin", "/api/orders/admin/list/all");
    let client = OrdersClient::new(Arc::clone(&api) as Arc<dyn Transport>);
    (api, client)
}

pub fn users_fixture() -> (Arc<FakeApi>, UsersClient) {
    let api = FakeApi::new();
    api.mount_with_defaults(
        "/users/admin",
        "/users/admin/list/all",
        json!({ "is_active": true, "role": "staff" }),
    );
    api.mount_create_alias("/users/admin/createUser", "/users/admin");
    let client = UsersClient::new(Arc::clone(&api) as Arc<dyn Transport>);
    (api, client)
}

// Seed helpers: direct inserts with sensible defaults.

/// Seeds an active product with a derived slug and a stock of 10.
pub fn seed_product(api: &FakeApi, name: &str) -> i64 {
    api.seed(
        "/products/admin",
        json!({
            "name": name,
            "slug": slugify(name),
            "price": 29.99,
            "status": "active",
            "stock": 10,
        }),
    )
}

/// Seeds an active category with a derived slug.
pub fn seed_category(api: &FakeApi, name: &str) -> i64 {
    api.seed(
        "/categories/admin",
        json!({
            "name": name,
            "slug": slugify(name),
            "is_active": 1,
            "product_count": 0,
        }),
    )
}

/// Seeds a pending two-item order totalling "124.98".
pub fn seed_order(api: &FakeApi, code: &str) -> i64 {
    api.seed(
        "/api/orders/admin",
        json!({
            "code": code,
            "customer_name": "Lan Pham",
            "customer_email": "lan@example.com",
            "status": "pending",
            "subtotal": "119.98",
            "shipping_fee": "5.00",
            "total": "124.98",
            "item_count": 2,
        }),
    )
}

/// Seeds an active 10-percent voucher.
pub fn seed_voucher(api: &FakeApi, code: &str) -> i64 {
    api.seed(
        "/discount-codes",
        json!({
            "code": code,
            "discount_type": "percentage",
            "discount_value": "10",
            "is_active": true,
            "starts_at": "2024-06-01T00:00:00Z",
        }),
    )
}

/// Seeds a 0-5kg rate priced "4.50" for the given carrier and zone.
pub fn seed_rate(api: &FakeApi, carrier_id: i64, zone_id: i64) -> i64 {
    api.seed(
        "/shipping/admin/rates",
        json!({
            "carrier_id": carrier_id,
            "zone_id": zone_id,
            "min_weight": 0.0,
            "max_weight": 5.0,
            "price": "4.50",
        }),
    )
}

/// Seeds one product into a flash-sale line-up collection.
pub fn seed_flash_sale_product(api: &FakeApi, path: &str, sale_id: i64, product_id: i64) -> i64 {
    api.seed(
        path,
        json!({
            "flash_sale_id": sale_id,
            "product_id": product_id,
            "product_name": format!("Product {product_id}"),
            "sale_price": 9.99,
        }),
    )
}

/// Seeds one movement into an inventory transaction-log collection.
pub fn seed_inventory_transaction(api: &FakeApi, path: &str, product_id: i64, delta: i64) -> i64 {
    api.seed(
        path,
        json!({
            "product_id": product_id,
            "delta": delta,
            "reason": "restock",
        }),
    )
}
