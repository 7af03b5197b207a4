//! Centralized configuration (environment variables + defaults).
//!
//! Components receive an explicit config value instead of reading working-directory file
//! names or environment variables on their own.

use crate::error::{Result, WalletError};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_KEY_FILE: &str = "wallet-keypair.json";
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_KEY_ENV_VAR: &str = "SOLANA_ADMIN_PRIVATE_KEY";
pub const DEFAULT_TREE_ADDRESS_FILE: &str = "tree-address.txt";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    pub key_file_path: PathBuf,
    pub rpc_endpoint_url: String,
    pub env_key_var_name: String,
    pub tree_address_path: PathBuf,
    pub rpc_timeout: Duration,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            key_file_path: PathBuf::from(DEFAULT_KEY_FILE),
            rpc_endpoint_url: DEFAULT_RPC_URL.to_string(),
            env_key_var_name: DEFAULT_KEY_ENV_VAR.to_string(),
            tree_address_path: PathBuf::from(DEFAULT_TREE_ADDRESS_FILE),
            rpc_timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS),
        }
    }
}

impl WalletConfig {
    /// Loads `.env` (if present) and overlays environment variables on the defaults.
    ///
    /// `WALLET_KEY_FILE` and `TREE_ADDRESS_FILE` accept `~` paths.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        Self {
            key_file_path: env_path("WALLET_KEY_FILE").unwrap_or(defaults.key_file_path),
            rpc_endpoint_url: env_nonempty("SOLANA_RPC_URL").unwrap_or(defaults.rpc_endpoint_url),
            env_key_var_name: env_nonempty("WALLET_KEY_ENV_VAR")
                .unwrap_or(defaults.env_key_var_name),
            tree_address_path: env_path("TREE_ADDRESS_FILE")
                .unwrap_or(defaults.tree_address_path),
            rpc_timeout: env_nonempty("RPC_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(|s| Duration::from_secs(s.max(1)))
                .unwrap_or(defaults.rpc_timeout),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopServerConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl ShopServerConfig {
    /// Database URL must be provided (no default).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let database_url =
            env_nonempty("DATABASE_URL").ok_or(WalletError::MissingConfig("DATABASE_URL"))?;
        let bind_addr = env_nonempty("SHOP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}

/// Expands a leading `~` like the Solana CLI does for keypair paths.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_path(name: &str) -> Option<PathBuf> {
    env_nonempty(name).map(|v| expand_path(&v))
}
