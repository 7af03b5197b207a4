//! Shop catalogue backed by PostgreSQL.

use crate::domain::shop::{ShopItem, ShopRepository};
use crate::error::{Result, WalletError};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

/// Reads `shop_items` through a connection pool.
#[derive(Clone)]
pub struct PostgresShopRepository {
    pool: PgPool,
}

impl PostgresShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects and makes sure the `shop_items` table exists.
    ///
    /// A pre-existing table may use any numeric type for `cost` (`BIGINT`, `NUMERIC`, ...).
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS shop_items (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                cost BIGINT NOT NULL,
                active BOOLEAN NOT NULL DEFAULT true,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ShopRepository for PostgresShopRepository {
    async fn list_active_items(&self) -> Result<Vec<ShopItem>> {
        let rows = sqlx::query(
            "SELECT row_to_json(shop_items.*) AS record
             FROM shop_items
             WHERE active = true
             ORDER BY cost ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let record: JsonValue = row.try_get("record")?;
            let item: ShopItem = serde_json::from_value(record)
                .map_err(|e| WalletError::Database(format!("unexpected shop_items row: {}", e)))?;
            items.push(item);
        }
        Ok(items)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
