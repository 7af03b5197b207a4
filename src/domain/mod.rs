pub mod lamports;
pub mod shop;
pub mod tree_config;
