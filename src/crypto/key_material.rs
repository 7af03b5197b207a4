//! Wallet key material: generation, validation and address derivation.
//!
//! The on-disk and in-env representation is the Solana CLI keypair layout: a JSON array of
//! 64 integers, the 32-byte ed25519 seed followed by the 32-byte public key.

use crate::error::{Result, WalletError};
use serde_json::Value as JsonValue;
use solana_program::pubkey::Pubkey;
use solana_sdk::signer::keypair::{keypair_from_seed, Keypair};
use solana_sdk::signer::Signer;
use std::fmt;

/// Length of a serialized keypair (seed + public key).
pub const SECRET_KEY_LEN: usize = 64;

/// Length of the ed25519 seed at the front of the serialized keypair.
pub const SEED_LEN: usize = 32;

/// A validated keypair. The public address is always derived from the secret bytes.
pub struct KeyMaterial {
    keypair: Keypair,
}

impl KeyMaterial {
    /// Generates fresh key material from the OS random source.
    pub fn generate() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Builds key material from a full 64-byte keypair, rejecting a public half that does not
    /// belong to the seed.
    pub fn from_secret_bytes(bytes: &[u8; SECRET_KEY_LEN]) -> Result<Self> {
        let keypair = keypair_from_seed(&bytes[..SEED_LEN])
            .map_err(|e| WalletError::InvalidKeyMaterial(format!("bad ed25519 seed: {}", e)))?;

        if keypair.pubkey().to_bytes()[..] != bytes[SEED_LEN..] {
            return Err(WalletError::InvalidKeyMaterial(
                "public key half does not match the secret seed".to_string(),
            ));
        }
        Ok(Self { keypair })
    }

    /// Parses and validates the JSON array form.
    pub fn from_json(text: &str) -> Result<Self> {
        let bytes = decode_secret_bytes(text)?;
        Self::from_secret_bytes(&bytes)
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Base58 public address.
    pub fn public_address(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    pub fn secret_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.keypair.to_bytes()
    }

    /// Renders the secret bytes in the persisted JSON array format.
    pub fn to_json(&self) -> String {
        // Serializing a byte slice to JSON cannot fail.
        serde_json::to_string(&self.secret_bytes().to_vec()).unwrap_or_default()
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("public_address", &self.public_address())
            .field("secret_bytes", &"<redacted>")
            .finish()
    }
}

/// Returns the address for a serialized keypair without keeping the key around.
pub fn derive_address(bytes: &[u8; SECRET_KEY_LEN]) -> Result<String> {
    Ok(KeyMaterial::from_secret_bytes(bytes)?.public_address())
}

/// Decodes the JSON array form into exactly 64 bytes.
///
/// Text that is not JSON at all is a parse error; JSON of the wrong shape, with values outside
/// `0..=255`, or of the wrong length is invalid key material.
pub fn decode_secret_bytes(text: &str) -> Result<[u8; SECRET_KEY_LEN]> {
    decode_secret_bytes_from("key material", text)
}

pub(crate) fn decode_secret_bytes_from(origin: &str, text: &str) -> Result<[u8; SECRET_KEY_LEN]> {
    let value: JsonValue = serde_json::from_str(text).map_err(|e| WalletError::Parse {
        origin: origin.to_string(),
        source: e,
    })?;

    let items = value.as_array().ok_or_else(|| {
        WalletError::InvalidKeyMaterial(format!("{} is not a JSON array", origin))
    })?;

    if items.len() != SECRET_KEY_LEN {
        return Err(WalletError::InvalidKeyMaterial(format!(
            "{} has {} bytes, expected {}",
            origin,
            items.len(),
            SECRET_KEY_LEN
        )));
    }

    let mut bytes = [0u8; SECRET_KEY_LEN];
    for (i, item) in items.iter().enumerate() {
        bytes[i] = item
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| {
                WalletError::InvalidKeyMaterial(format!(
                    "{} element {} is not a byte (0-255): {}",
                    origin, i, item
                ))
            })?;
    }
    Ok(bytes)
}
