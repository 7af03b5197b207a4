use super::{ShopItem, ShopRepository};
use crate::error::{Result, WalletError};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process catalogue. Applies the same filter and ordering as the SQL query.
#[derive(Default)]
pub struct InMemoryShopRepository {
    items: RwLock<Vec<ShopItem>>,
    /// When set, every query fails with this message, to exercise the error path.
    failure: RwLock<Option<String>>,
}

impl InMemoryShopRepository {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self {
            items: RwLock::new(items),
            ..Default::default()
        }
    }

    pub async fn insert(&self, item: ShopItem) {
        self.items.write().await.push(item);
    }

    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    pub async fn recover(&self) {
        *self.failure.write().await = None;
    }
}

#[async_trait]
impl ShopRepository for InMemoryShopRepository {
    async fn list_active_items(&self) -> Result<Vec<ShopItem>> {
        if let Some(msg) = self.failure.read().await.clone() {
            return Err(WalletError::Database(msg));
        }
        let mut active: Vec<ShopItem> = self
            .items
            .read()
            .await
            .iter()
            .filter(|i| i.active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.cmp_cost(b));
        Ok(active)
    }

    async fn ping(&self) -> Result<()> {
        if let Some(msg) = self.failure.read().await.clone() {
            return Err(WalletError::Database(msg));
        }
        Ok(())
    }
}
