//! Result of one read-only RPC query, rendered as text or JSON.

use crate::domain::lamports::Lamports;
use crate::error::Result;
use crate::infra::solana::NetworkVersion;
use crate::storage::key_store::{KeySource, KeyStore};
use crate::storage::tree_address::parse_address;
use chrono::{DateTime, Utc};
use serde::Serialize;
use solana_program::pubkey::Pubkey;

#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub endpoint: String,
    pub checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<NetworkVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lamports: Option<Lamports>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sol: Option<String>,
}

impl QueryReport {
    pub fn new(endpoint: impl Into<String>, checked_at: DateTime<Utc>) -> Self {
        Self {
            endpoint: endpoint.into(),
            checked_at,
            version: None,
            address: None,
            lamports: None,
            sol: None,
        }
    }

    pub fn with_version(mut self, version: NetworkVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_balance(mut self, address: &Pubkey, balance: Lamports) -> Self {
        self.address = Some(address.to_string());
        self.sol = Some(balance.to_sol_string());
        self.lamports = Some(balance);
        self
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![format!("Endpoint: {}", self.endpoint)];
        if let Some(v) = &self.version {
            lines.push(format!("Solana core: {}", v.solana_core));
            if let Some(fs) = v.feature_set {
                lines.push(format!("Feature set: {}", fs));
            }
        }
        if let (Some(address), Some(lamports)) = (&self.address, self.lamports) {
            lines.push(format!("Address: {}", address));
            lines.push(format!(
                "Balance: {} lamports ({})",
                lamports.as_u64(),
                lamports
            ));
        }
        lines.join("\n")
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Address to query: the explicit one, else the admin wallet from `fallback`.
pub fn balance_target(address: Option<&str>, fallback: &KeySource) -> Result<Pubkey> {
    match address {
        Some(a) => parse_address(a),
        None => Ok(KeyStore::load(fallback)?.pubkey()),
    }
}
