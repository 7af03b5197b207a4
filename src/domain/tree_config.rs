//! Compressed Merkle tree configuration account (Bubblegum `TreeConfig`).
//!
//! The config lives in a PDA derived from the tree address under the Bubblegum program.
//! Account layout: 8-byte Anchor discriminator, creator (32), delegate (32),
//! total_mint_capacity (u64 LE), num_minted (u64 LE), is_public (bool), is_decompressible (u8).

use crate::error::{Result, WalletError};
use serde::Serialize;
use sha2::{Digest, Sha256};
use solana_program::pubkey::Pubkey;

pub const BUBBLEGUM_PROGRAM_ID: Pubkey =
    solana_program::pubkey!("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY");

const DISCRIMINATOR_LEN: usize = 8;
pub const TREE_CONFIG_LEN: usize = DISCRIMINATOR_LEN + 32 + 32 + 8 + 8 + 1 + 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeConfig {
    pub tree_creator: String,
    pub tree_delegate: String,
    pub total_mint_capacity: u64,
    pub num_minted: u64,
    pub is_public: bool,
    pub is_decompressible: u8,
}

/// Anchor account discriminator: first 8 bytes of sha256("account:<Name>").
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = Sha256::digest(format!("account:{}", name).as_bytes());
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}

/// Address of the config account for `tree`.
pub fn tree_config_address(tree: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[tree.as_ref()], &BUBBLEGUM_PROGRAM_ID).0
}

impl TreeConfig {
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < TREE_CONFIG_LEN {
            return Err(WalletError::UnsupportedState(format!(
                "tree config account data too short: {} bytes, expected at least {}",
                data.len(),
                TREE_CONFIG_LEN
            )));
        }

        let expected = account_discriminator("TreeConfig");
        if data[..DISCRIMINATOR_LEN] != expected {
            return Err(WalletError::UnsupportedState(format!(
                "account is not a tree config (discriminator {}, expected {})",
                hex::encode(&data[..DISCRIMINATOR_LEN]),
                hex::encode(expected)
            )));
        }

        let body = &data[DISCRIMINATOR_LEN..TREE_CONFIG_LEN];
        let tree_creator = pubkey_at(&body[0..32]);
        let tree_delegate = pubkey_at(&body[32..64]);
        let total_mint_capacity = u64_le(&body[64..72]);
        let num_minted = u64_le(&body[72..80]);
        let is_public = body[80] != 0;
        let is_decompressible = body[81];

        Ok(Self {
            tree_creator: tree_creator.to_string(),
            tree_delegate: tree_delegate.to_string(),
            total_mint_capacity,
            num_minted,
            is_public,
            is_decompressible,
        })
    }
}

fn pubkey_at(bytes: &[u8]) -> Pubkey {
    let mut arr = [0u8; 32];
    arr.copy_from_slice(bytes);
    Pubkey::new_from_array(arr)
}

fn u64_le(bytes: &[u8]) -> u64 {
    let mut arr = [0u8; 8];
    arr.copy_from_slice(bytes);
    u64::from_le_bytes(arr)
}
