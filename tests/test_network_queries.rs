//! RPC query failure paths. No live cluster needed: the endpoint is a closed local port.

use solana_storefront_wallet::storage::read_tree_address;
use solana_storefront_wallet::{NetworkProbe, WalletError};
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;

async fn unreachable_endpoint() -> String {
    // Bind then drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn unreachable_endpoint_reports_remote_failure() {
    let endpoint = unreachable_endpoint().await;
    let client = NetworkProbe::new(endpoint.clone(), Duration::from_secs(5));

    let result = tokio::time::timeout(Duration::from_secs(30), client.version())
        .await
        .expect("query must not hang");

    match result {
        Err(WalletError::Remote { endpoint: e, .. }) => assert_eq!(e, endpoint),
        other => panic!("expected remote failure, got {:?}", other),
    }
}

#[tokio::test]
async fn balance_against_unreachable_endpoint_fails_once() {
    let client = NetworkProbe::new(unreachable_endpoint().await, Duration::from_secs(5));
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        client.balance(&Pubkey::new_unique()),
    )
    .await
    .expect("query must not hang");
    assert!(matches!(result, Err(WalletError::Remote { .. })));
}

#[tokio::test]
async fn tree_config_against_unreachable_endpoint_is_remote_failure() {
    let client = NetworkProbe::new(unreachable_endpoint().await, Duration::from_secs(5));
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        client.tree_config(&Pubkey::new_unique()),
    )
    .await
    .expect("query must not hang");
    assert!(matches!(result, Err(WalletError::Remote { .. })));
}

#[test]
fn tree_address_file_errors_are_distinct() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("tree-address.txt");
    assert!(matches!(
        read_tree_address(&missing).unwrap_err(),
        WalletError::NotFound(_)
    ));

    std::fs::write(&missing, "   \n").unwrap();
    assert!(matches!(
        read_tree_address(&missing).unwrap_err(),
        WalletError::InvalidAddress { .. }
    ));

    std::fs::write(&missing, "not-a-base58-address-0OIl").unwrap();
    assert!(matches!(
        read_tree_address(&missing).unwrap_err(),
        WalletError::InvalidAddress { .. }
    ));

    let tree = Pubkey::new_unique();
    std::fs::write(&missing, format!("{}\n", tree)).unwrap();
    assert_eq!(read_tree_address(&missing).unwrap(), tree);
}
