pub mod key_store;
pub mod shop_postgres;
pub mod tree_address;

pub use key_store::{KeySource, KeyStore};
pub use shop_postgres::PostgresShopRepository;
pub use tree_address::read_tree_address;
