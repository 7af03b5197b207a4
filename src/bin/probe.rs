use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};

use solana_storefront_wallet::app::{balance_target, AddressSource, QueryReport};
use solana_storefront_wallet::infra::config::{
    expand_path, WalletConfig, DEFAULT_KEY_ENV_VAR, DEFAULT_KEY_FILE, DEFAULT_RPC_URL,
};
use solana_storefront_wallet::infra::logging::init_tracing;
use solana_storefront_wallet::NetworkProbe;

#[derive(Parser)]
#[command(name = "probe")]
#[command(about = "Run one read-only query against a Solana RPC endpoint")]
struct Cli {
    /// RPC endpoint.
    #[arg(long, env = "SOLANA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Node software version (default).
    Version,
    /// Balance of ADDRESS, or of the admin wallet (env var, then key file) when omitted.
    Balance {
        address: Option<String>,
        #[arg(long, env = "WALLET_KEY_FILE", default_value = DEFAULT_KEY_FILE)]
        key_file: String,
        #[arg(long, env = "WALLET_KEY_ENV_VAR", default_value = DEFAULT_KEY_ENV_VAR)]
        env_var: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = WalletConfig {
        rpc_endpoint_url: cli.rpc_url,
        ..WalletConfig::from_env()
    };
    let client = NetworkProbe::from_config(&config);
    tracing::debug!(endpoint = client.endpoint(), timeout = ?config.rpc_timeout, "querying rpc");

    let report = QueryReport::new(client.endpoint(), Utc::now());
    let report = match cli.command.unwrap_or(Command::Version) {
        Command::Version => report.with_version(client.version().await?),
        Command::Balance {
            address,
            key_file,
            env_var,
        } => {
            let fallback = AddressSource::Auto.key_source(expand_path(&key_file), env_var);
            let pubkey = balance_target(address.as_deref(), &fallback)?;
            let balance = client.balance(&pubkey).await?;
            report.with_balance(&pubkey, balance)
        }
    };

    if cli.json {
        println!("{}", report.render_json()?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
