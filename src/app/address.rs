use crate::storage::key_store::KeySource;
use clap::ValueEnum;
use std::path::PathBuf;

/// `--source` choice of the address tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AddressSource {
    /// The key file only.
    File,
    /// The admin key environment variable only.
    Env,
    /// The environment variable, falling back to the key file when it is unset.
    Auto,
}

impl AddressSource {
    pub fn key_source(self, path: PathBuf, var: String) -> KeySource {
        match self {
            AddressSource::File => KeySource::File(path),
            AddressSource::Env => KeySource::Env(var),
            AddressSource::Auto => KeySource::EnvThenFile { var, path },
        }
    }
}
