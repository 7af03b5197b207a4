// Reads the tree address saved by the tree creation step.

use crate::error::{Result, WalletError};
use solana_program::pubkey::Pubkey;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Reads a single base58 address from a plain text file.
pub fn read_tree_address(path: &Path) -> Result<Pubkey> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(WalletError::NotFound(format!(
                "tree address file {}",
                path.display()
            )));
        }
        Err(e) => {
            return Err(WalletError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };
    parse_address(text.trim())
}

pub fn parse_address(value: &str) -> Result<Pubkey> {
    if value.is_empty() {
        return Err(WalletError::InvalidAddress {
            value: value.to_string(),
            reason: "address is empty".to_string(),
        });
    }
    Pubkey::from_str(value).map_err(|e| WalletError::InvalidAddress {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
