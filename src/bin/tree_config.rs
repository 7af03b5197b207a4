use clap::{ArgAction, Parser};

use solana_storefront_wallet::domain::tree_config::tree_config_address;
use solana_storefront_wallet::infra::config::{
    expand_path, WalletConfig, DEFAULT_RPC_URL, DEFAULT_TREE_ADDRESS_FILE,
};
use solana_storefront_wallet::infra::logging::init_tracing;
use solana_storefront_wallet::storage::read_tree_address;
use solana_storefront_wallet::NetworkProbe;

#[derive(Parser)]
#[command(name = "tree_config")]
#[command(about = "Fetch the on-chain config of the stored compressed Merkle tree")]
struct Cli {
    /// RPC endpoint.
    #[arg(long, env = "SOLANA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// File holding the tree address.
    #[arg(long, env = "TREE_ADDRESS_FILE", default_value = DEFAULT_TREE_ADDRESS_FILE)]
    tree_address_file: String,

    /// Print the config as JSON.
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = WalletConfig {
        rpc_endpoint_url: cli.rpc_url,
        tree_address_path: expand_path(&cli.tree_address_file),
        ..WalletConfig::from_env()
    };

    let tree = read_tree_address(&config.tree_address_path)?;
    tracing::debug!(%tree, config_account = %tree_config_address(&tree), "resolving tree config");

    let client = NetworkProbe::from_config(&config);
    let tree_config = client.tree_config(&tree).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tree_config)?);
    } else {
        println!("Tree: {}", tree);
        println!("numMinted: {}", tree_config.num_minted);
        println!("totalMintCapacity: {}", tree_config.total_mint_capacity);
        println!("isPublic: {}", tree_config.is_public);
    }
    Ok(())
}
