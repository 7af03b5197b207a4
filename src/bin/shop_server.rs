// src/bin/shop_server.rs

use clap::{ArgAction, Parser};
use std::sync::Arc;

use solana_storefront_wallet::infra::config::DEFAULT_BIND_ADDR;
use solana_storefront_wallet::infra::logging::init_tracing;
use solana_storefront_wallet::transport;
use solana_storefront_wallet::{PostgresShopRepository, ShopServerConfig};

#[derive(Parser)]
#[command(name = "shop_server")]
#[command(about = "Serve the shop listing API and the static web shell")]
struct Cli {
    /// Listen address.
    #[arg(long, env = "SHOP_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ShopServerConfig {
        bind_addr: cli.bind,
        ..ShopServerConfig::from_env()?
    };

    tracing::info!("Connecting to shop database...");
    let repository = PostgresShopRepository::connect(&config.database_url).await?;
    let app_state = transport::http::AppState::new(Arc::new(repository));

    let app = transport::http::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Shop API listening on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received (Ctrl+C)...");
        })
        .await?;

    tracing::info!("Graceful shutdown complete.");
    Ok(())
}
