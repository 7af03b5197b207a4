// Read-only queries against a Solana RPC endpoint. One attempt per call, no retries.

use serde::Serialize;
use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;
use std::time::Duration;

use crate::domain::lamports::Lamports;
use crate::domain::tree_config::{tree_config_address, TreeConfig, BUBBLEGUM_PROGRAM_ID};
use crate::error::{Result, WalletError};
use crate::infra::config::WalletConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkVersion {
    pub solana_core: String,
    pub feature_set: Option<u32>,
}

pub struct NetworkProbe {
    client: RpcClient,
    endpoint: String,
}

impl NetworkProbe {
    /// Builds a client with an explicit request timeout so an unreachable endpoint fails
    /// instead of hanging.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let endpoint = endpoint.into();
        let client = RpcClient::new_with_timeout_and_commitment(
            endpoint.clone(),
            timeout,
            CommitmentConfig::confirmed(),
        );
        Self { client, endpoint }
    }

    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(config.rpc_endpoint_url.clone(), config.rpc_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn version(&self) -> Result<NetworkVersion> {
        let v = self.client.get_version().await.map_err(|e| self.remote(e))?;
        Ok(NetworkVersion {
            solana_core: v.solana_core,
            feature_set: v.feature_set,
        })
    }

    pub async fn balance(&self, address: &Pubkey) -> Result<Lamports> {
        let lamports = self
            .client
            .get_balance(address)
            .await
            .map_err(|e| self.remote(e))?;
        Ok(Lamports(lamports))
    }

    /// Resolves and decodes the config account of a compressed Merkle tree.
    pub async fn tree_config(&self, tree: &Pubkey) -> Result<TreeConfig> {
        let config_address = tree_config_address(tree);
        let response = self
            .client
            .get_account_with_commitment(&config_address, CommitmentConfig::confirmed())
            .await
            .map_err(|e| self.remote(e))?;

        let account = response.value.ok_or_else(|| {
            WalletError::UnsupportedState(format!(
                "tree config account {} for tree {} does not exist",
                config_address, tree
            ))
        })?;

        if account.owner != BUBBLEGUM_PROGRAM_ID {
            return Err(WalletError::UnsupportedState(format!(
                "account {} is owned by {}, not the Bubblegum program",
                config_address, account.owner
            )));
        }

        TreeConfig::decode(&account.data)
    }

    fn remote(&self, e: ClientError) -> WalletError {
        WalletError::Remote {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        }
    }
}
