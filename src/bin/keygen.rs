use clap::{ArgAction, Parser};
use std::path::PathBuf;

use solana_storefront_wallet::app::{run_keygen, KeygenPlan};
use solana_storefront_wallet::infra::config::{WalletConfig, DEFAULT_KEY_ENV_VAR};
use solana_storefront_wallet::infra::logging::init_tracing;
use solana_storefront_wallet::KeyMaterial;

#[derive(Parser)]
#[command(name = "keygen")]
#[command(about = "Generate a new wallet keypair")]
struct Cli {
    /// Write the keypair to this file (JSON array of 64 bytes).
    #[arg(long, conflicts_with = "save")]
    out: Option<String>,

    /// Write the keypair to the configured key file (WALLET_KEY_FILE, default wallet-keypair.json).
    #[arg(long)]
    save: bool,

    /// Set the admin key variable in this dotenv file.
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Variable name used with --env-file.
    #[arg(long, env = "WALLET_KEY_ENV_VAR", default_value = DEFAULT_KEY_ENV_VAR)]
    env_var: String,

    /// Replace an existing key file.
    #[arg(long)]
    force: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = WalletConfig::from_env();

    let plan = KeygenPlan::new(
        cli.out.as_deref(),
        cli.save,
        cli.env_file,
        Some(cli.env_var),
        cli.force,
        &config,
    );

    let material = KeyMaterial::generate();
    tracing::debug!(address = %material.public_address(), ?plan, "generated keypair");

    run_keygen(&material, &plan, &mut std::io::stdout().lock())?;
    Ok(())
}
