//! Persistence for wallet key material: the key file and the admin key environment variable.

use crate::crypto::key_material::{decode_secret_bytes_from, KeyMaterial};
use crate::error::{Result, WalletError};
use std::env::VarError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where to look for persisted key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    File(PathBuf),
    Env(String),
    /// Environment variable first; the file is used only when the variable is absent.
    EnvThenFile { var: String, path: PathBuf },
}

pub struct KeyStore;

impl KeyStore {
    pub fn load(source: &KeySource) -> Result<KeyMaterial> {
        match source {
            KeySource::File(path) => Self::load_from_file(path),
            KeySource::Env(var) => Self::load_from_env(var),
            KeySource::EnvThenFile { var, path } => match Self::load_from_env(var) {
                Err(WalletError::NotFound(_)) => Self::load_from_file(path),
                other => other,
            },
        }
    }

    pub fn load_from_file(path: &Path) -> Result<KeyMaterial> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(WalletError::NotFound(format!(
                    "key file {}",
                    path.display()
                )));
            }
            // read_to_string reports non-UTF-8 contents as InvalidData: the file is there but corrupt.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(WalletError::NotUtf8 {
                    origin: format!("key file {}", path.display()),
                });
            }
            Err(e) => {
                return Err(WalletError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        let origin = format!("key file {}", path.display());
        let bytes = decode_secret_bytes_from(&origin, &text)?;
        KeyMaterial::from_secret_bytes(&bytes)
    }

    pub fn load_from_env(var: &str) -> Result<KeyMaterial> {
        let text = match std::env::var(var) {
            Ok(v) if !v.trim().is_empty() => v,
            Ok(_) | Err(VarError::NotPresent) => {
                return Err(WalletError::NotFound(format!(
                    "environment variable {}",
                    var
                )))
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(WalletError::NotUtf8 {
                    origin: format!("environment variable {}", var),
                })
            }
        };
        let origin = format!("environment variable {}", var);
        let bytes = decode_secret_bytes_from(&origin, &text)?;
        KeyMaterial::from_secret_bytes(&bytes)
    }

    /// Writes the key file atomically (temp file in the same directory, then rename).
    ///
    /// With `overwrite == false` an existing file is left untouched and `AlreadyExists` is
    /// returned, including when another writer wins the race for the same path.
    pub fn write_key_file(path: &Path, material: &KeyMaterial, overwrite: bool) -> Result<()> {
        if !overwrite && path.exists() {
            return Err(WalletError::AlreadyExists(path.display().to_string()));
        }

        let persist_err = |source: io::Error| WalletError::Persist {
            path: path.display().to_string(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(parent_dir(path)).map_err(persist_err)?;
        tmp.write_all(material.to_json().as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(persist_err)?;

        if overwrite {
            tmp.persist(path).map_err(|e| persist_err(e.error))?;
        } else {
            tmp.persist_noclobber(path).map_err(|e| {
                if e.error.kind() == io::ErrorKind::AlreadyExists {
                    WalletError::AlreadyExists(path.display().to_string())
                } else {
                    persist_err(e.error)
                }
            })?;
        }
        Ok(())
    }

    /// Sets `var_name=[...]` in a dotenv file, replacing an existing assignment of the same
    /// variable and keeping every other line.
    pub fn write_env_file(path: &Path, var_name: &str, material: &KeyMaterial) -> Result<()> {
        let existing = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(WalletError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        let assignment = format!("{}={}", var_name, material.to_json());
        let prefix = format!("{}=", var_name);
        let mut replaced = false;
        let mut lines: Vec<String> = existing
            .lines()
            .map(|line| {
                let indented = line.trim_start();
                let bare = indented.strip_prefix("export ").map(str::trim_start);
                match bare {
                    // Keep `export` so the file still works with `source .env`.
                    Some(rest) if rest.starts_with(&prefix) => {
                        replaced = true;
                        format!("export {}", assignment)
                    }
                    None if indented.starts_with(&prefix) => {
                        replaced = true;
                        assignment.clone()
                    }
                    _ => line.to_string(),
                }
            })
            .collect();
        if !replaced {
            lines.push(assignment);
        }
        let mut contents = lines.join("\n");
        contents.push('\n');

        let persist_err = |source: io::Error| WalletError::Persist {
            path: path.display().to_string(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(parent_dir(path)).map_err(persist_err)?;
        tmp.write_all(contents.as_bytes()).map_err(persist_err)?;
        tmp.persist(path).map_err(|e| persist_err(e.error))?;
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
