use std::io;
use thiserror::Error;

/// Errors surfaced by the wallet tools and the shop service.
///
/// Missing resources, corrupt resources and remote failures are kept apart so callers
/// (and users reading the message) can tell "not there" from "there but broken".
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Parse error in {origin}: value is not valid UTF-8")]
    NotUtf8 { origin: String },

    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("Invalid address {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("Refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("Failed to persist {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("RPC request to {endpoint} failed: {reason}")]
    Remote { endpoint: String, reason: String },

    #[error("Unsupported state: {0}")]
    UnsupportedState(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Missing configuration: {0} must be set")]
    MissingConfig(&'static str),
}

impl From<sqlx::Error> for WalletError {
    fn from(e: sqlx::Error) -> Self {
        WalletError::Database(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WalletError>;
