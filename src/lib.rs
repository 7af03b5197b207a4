pub mod app;
pub mod crypto;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use crypto::key_material::KeyMaterial;
pub use domain::lamports::Lamports;
pub use domain::shop::{InMemoryShopRepository, ShopItem, ShopRepository};
pub use domain::tree_config::TreeConfig;
pub use error::WalletError;
pub use infra::config::{ShopServerConfig, WalletConfig};
pub use infra::solana::NetworkProbe;
pub use storage::{KeySource, KeyStore, PostgresShopRepository};
