//! Shop catalogue: item shape and the repository contract behind `GET /api/shop`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as JsonValue};
use std::cmp::Ordering;

pub mod memory;

pub use memory::InMemoryShopRepository;

/// One row of the `shop_items` table.
///
/// Only `cost` and `active` are interpreted; every other column is passed through as-is.
/// `cost` is kept as the JSON number the database produced, so integer and `NUMERIC`
/// columns both decode and are echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub cost: Number,
    pub active: bool,
    #[serde(flatten)]
    pub attributes: Map<String, JsonValue>,
}

impl ShopItem {
    pub fn new(cost: impl Into<Number>, active: bool) -> Self {
        Self {
            cost: cost.into(),
            active,
            attributes: Map::new(),
        }
    }

    /// Orders by cost. Integers compare exactly; anything else falls back to `f64`.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        match (self.cost.as_i64(), other.cost.as_i64()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => {
                let a = self.cost.as_f64().unwrap_or(f64::NAN);
                let b = other.cost.as_f64().unwrap_or(f64::NAN);
                a.total_cmp(&b)
            }
        }
    }

    pub fn with_attribute(mut self, key: &str, value: JsonValue) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }
}

/// Source of the shop listing.
///
/// `list_active_items` returns only items with `active == true`, sorted ascending by `cost`.
#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn list_active_items(&self) -> crate::error::Result<Vec<ShopItem>>;

    /// Cheap reachability check used by `/health`.
    async fn ping(&self) -> crate::error::Result<()> {
        Ok(())
    }
}
