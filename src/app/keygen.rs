//! Key generation flow: pick the sinks, persist, and report to the user.

use crate::crypto::key_material::KeyMaterial;
use crate::error::{Result, WalletError};
use crate::infra::config::{expand_path, WalletConfig};
use crate::storage::key_store::KeyStore;
use std::io::Write;
use std::path::PathBuf;

/// Where a freshly generated key goes. With no file sink, the key is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenPlan {
    pub key_file: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub env_var: String,
    pub overwrite: bool,
}

impl KeygenPlan {
    /// `--out` wins over `--save`; `--save` uses the configured key file path.
    pub fn new(
        out: Option<&str>,
        save: bool,
        env_file: Option<PathBuf>,
        env_var: Option<String>,
        overwrite: bool,
        config: &WalletConfig,
    ) -> Self {
        let key_file = match (out, save) {
            (Some(p), _) => Some(expand_path(p)),
            (None, true) => Some(config.key_file_path.clone()),
            (None, false) => None,
        };
        Self {
            key_file,
            env_file,
            env_var: env_var.unwrap_or_else(|| config.env_key_var_name.clone()),
            overwrite,
        }
    }

    pub fn prints_secret(&self) -> bool {
        self.key_file.is_none() && self.env_file.is_none()
    }
}

/// Persists `material` per `plan` and writes the user-facing report to `out`.
///
/// The stdout sink carries both the address and the full secret array; file sinks print
/// only the address and where the key went.
pub fn run_keygen(material: &KeyMaterial, plan: &KeygenPlan, out: &mut impl Write) -> Result<()> {
    let stdout_err = |source: std::io::Error| WalletError::Io {
        path: "stdout".to_string(),
        source,
    };

    if plan.prints_secret() {
        writeln!(out, "Public address: {}", material.public_address()).map_err(stdout_err)?;
        writeln!(out, "Secret key: {}", material.to_json()).map_err(stdout_err)?;
        return Ok(());
    }

    if let Some(path) = &plan.key_file {
        KeyStore::write_key_file(path, material, plan.overwrite)?;
        writeln!(out, "> Keypair written to {}", path.display()).map_err(stdout_err)?;
    }

    if let Some(env_file) = &plan.env_file {
        KeyStore::write_env_file(env_file, &plan.env_var, material)?;
        writeln!(out, "> {} set in {}", plan.env_var, env_file.display()).map_err(stdout_err)?;
    }

    writeln!(out, "Public address: {}", material.public_address()).map_err(stdout_err)?;
    Ok(())
}
