use clap::{ArgAction, Parser};

use solana_storefront_wallet::app::AddressSource;
use solana_storefront_wallet::infra::config::{expand_path, DEFAULT_KEY_ENV_VAR, DEFAULT_KEY_FILE};
use solana_storefront_wallet::infra::logging::init_tracing;
use solana_storefront_wallet::KeyStore;

#[derive(Parser)]
#[command(name = "show_address")]
#[command(about = "Load a persisted keypair and print its public address")]
struct Cli {
    #[arg(long, value_enum, default_value = "file")]
    source: AddressSource,

    /// Key file path.
    #[arg(long, env = "WALLET_KEY_FILE", default_value = DEFAULT_KEY_FILE)]
    key_file: String,

    /// Environment variable holding the key.
    #[arg(long, env = "WALLET_KEY_ENV_VAR", default_value = DEFAULT_KEY_ENV_VAR)]
    env_var: String,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = cli
        .source
        .key_source(expand_path(&cli.key_file), cli.env_var);
    tracing::debug!(?source, "loading keypair");

    let material = KeyStore::load(&source)?;
    println!("Public address: {}", material.public_address());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_fall_back_to_environment_then_defaults() {
        std::env::remove_var("WALLET_KEY_FILE");
        std::env::remove_var("WALLET_KEY_ENV_VAR");
        let cli = Cli::try_parse_from(["show_address"]).unwrap();
        assert_eq!(cli.key_file, DEFAULT_KEY_FILE);
        assert_eq!(cli.env_var, DEFAULT_KEY_ENV_VAR);
        assert_eq!(cli.source, AddressSource::File);

        std::env::set_var("WALLET_KEY_FILE", "/tmp/from-env.json");
        std::env::set_var("WALLET_KEY_ENV_VAR", "SHOP_ADMIN_KEY");
        let cli = Cli::try_parse_from(["show_address", "--source", "auto"]).unwrap();
        assert_eq!(cli.key_file, "/tmp/from-env.json");
        assert_eq!(cli.env_var, "SHOP_ADMIN_KEY");
        assert_eq!(cli.source, AddressSource::Auto);

        let cli = Cli::try_parse_from(["show_address", "--key-file", "flag.json"]).unwrap();
        assert_eq!(cli.key_file, "flag.json");

        std::env::remove_var("WALLET_KEY_FILE");
        std::env::remove_var("WALLET_KEY_ENV_VAR");
    }
}
