use crate::domain::shop::{ShopItem, ShopRepository};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub shop: Arc<dyn ShopRepository>,
}

impl AppState {
    pub fn new(shop: Arc<dyn ShopRepository>) -> Self {
        Self { shop }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ShopListResponse {
    /// Active items, cheapest first.
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<ShopItem>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Message returned to callers whenever the catalogue query fails.
pub const SHOP_FETCH_FAILED: &str = "Failed to fetch shop items";
