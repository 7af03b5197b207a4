//! Key file / env var persistence:
//! generate -> persist -> reload must reproduce the same address, and every failure mode
//! (missing, not JSON, wrong shape, mismatched halves) must be reported distinctly.

use solana_storefront_wallet::crypto::key_material::SECRET_KEY_LEN;
use solana_storefront_wallet::{KeyMaterial, KeySource, KeyStore, WalletError};
use std::collections::HashSet;
use std::fs;

#[test]
fn file_round_trip_reproduces_address() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wallet-keypair.json");

    let generated = KeyMaterial::generate();
    KeyStore::write_key_file(&path, &generated, false)?;

    // File holds a plain JSON array of 64 integers.
    let on_disk: Vec<u8> = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(on_disk.len(), SECRET_KEY_LEN);
    assert_eq!(on_disk, generated.secret_bytes().to_vec());

    let reloaded = KeyStore::load_from_file(&path)?;
    assert_eq!(reloaded.public_address(), generated.public_address());
    Ok(())
}

#[test]
fn generated_keys_do_not_repeat() {
    let addresses: HashSet<String> = (0..64)
        .map(|_| KeyMaterial::generate().public_address())
        .collect();
    assert_eq!(addresses.len(), 64);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = KeyStore::load_from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, WalletError::NotFound(_)), "got {err}");
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn empty_or_garbage_file_is_parse_error_not_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let empty = dir.path().join("empty.json");
    fs::write(&empty, "").unwrap();
    let err = KeyStore::load_from_file(&empty).unwrap_err();
    assert!(matches!(err, WalletError::Parse { .. }), "got {err}");

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "[1, 2, 3").unwrap();
    let err = KeyStore::load_from_file(&garbage).unwrap_err();
    assert!(matches!(err, WalletError::Parse { .. }), "got {err}");
}

#[test]
fn wrong_length_file_is_invalid_key_material() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.json");
    fs::write(&path, "[1,2,3]").unwrap();
    let err = KeyStore::load_from_file(&path).unwrap_err();
    assert!(matches!(err, WalletError::InvalidKeyMaterial(_)), "got {err}");
}

#[test]
fn tampered_public_half_is_rejected() {
    use rand::Rng;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tampered.json");

    let mut bytes = KeyMaterial::generate().secret_bytes().to_vec();
    let idx = rand::thread_rng().gen_range(32..SECRET_KEY_LEN);
    bytes[idx] ^= 0x01;
    fs::write(&path, serde_json::to_string(&bytes).unwrap()).unwrap();

    let err = KeyStore::load_from_file(&path).unwrap_err();
    assert!(matches!(err, WalletError::InvalidKeyMaterial(_)), "got {err}");
}

#[test]
fn existing_key_file_is_not_overwritten_without_force() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wallet-keypair.json");

    let first = KeyMaterial::generate();
    KeyStore::write_key_file(&path, &first, false)?;

    let second = KeyMaterial::generate();
    let err = KeyStore::write_key_file(&path, &second, false).unwrap_err();
    assert!(matches!(err, WalletError::AlreadyExists(_)), "got {err}");
    assert_eq!(
        KeyStore::load_from_file(&path)?.public_address(),
        first.public_address()
    );

    KeyStore::write_key_file(&path, &second, true)?;
    assert_eq!(
        KeyStore::load_from_file(&path)?.public_address(),
        second.public_address()
    );

    // No temp files left behind.
    assert_eq!(fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn unwritable_sink_reports_persist_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("wallet-keypair.json");
    let err = KeyStore::write_key_file(&path, &KeyMaterial::generate(), false).unwrap_err();
    assert!(matches!(err, WalletError::Persist { .. }), "got {err}");
    assert!(err.to_string().contains("wallet-keypair.json"));
}

#[test]
fn env_var_loading_distinguishes_missing_and_corrupt() {
    let var = "STOREFRONT_TEST_ENV_KEY_DISTINCT";

    std::env::remove_var(var);
    let err = KeyStore::load_from_env(var).unwrap_err();
    assert!(matches!(err, WalletError::NotFound(_)), "got {err}");

    std::env::set_var(var, "not-json");
    let err = KeyStore::load_from_env(var).unwrap_err();
    assert!(matches!(err, WalletError::Parse { .. }), "got {err}");

    std::env::set_var(var, "[1,2,3]");
    let err = KeyStore::load_from_env(var).unwrap_err();
    assert!(matches!(err, WalletError::InvalidKeyMaterial(_)), "got {err}");

    let km = KeyMaterial::generate();
    std::env::set_var(var, km.to_json());
    assert_eq!(
        KeyStore::load_from_env(var).unwrap().public_address(),
        km.public_address()
    );
    std::env::remove_var(var);
}

#[test]
fn env_then_file_falls_back_only_when_var_is_absent() {
    let var = "STOREFRONT_TEST_ENV_KEY_FALLBACK";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet-keypair.json");
    let from_file = KeyMaterial::generate();
    KeyStore::write_key_file(&path, &from_file, false).unwrap();

    let source = KeySource::EnvThenFile {
        var: var.to_string(),
        path: path.clone(),
    };

    std::env::remove_var(var);
    assert_eq!(
        KeyStore::load(&source).unwrap().public_address(),
        from_file.public_address()
    );

    // A corrupt variable is reported, not skipped.
    std::env::set_var(var, "[0]");
    assert!(matches!(
        KeyStore::load(&source).unwrap_err(),
        WalletError::InvalidKeyMaterial(_)
    ));

    let from_env = KeyMaterial::generate();
    std::env::set_var(var, from_env.to_json());
    assert_eq!(
        KeyStore::load(&source).unwrap().public_address(),
        from_env.public_address()
    );
    std::env::remove_var(var);
}

#[test]
fn env_file_assignment_is_replaced_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let env_file = dir.path().join(".env");
    fs::write(
        &env_file,
        "DATABASE_URL=postgres://localhost/shop\nSOLANA_ADMIN_PRIVATE_KEY=[1,2,3]\n",
    )?;

    let km = KeyMaterial::generate();
    KeyStore::write_env_file(&env_file, "SOLANA_ADMIN_PRIVATE_KEY", &km)?;

    let mut vars = std::collections::HashMap::new();
    for item in dotenv::from_path_iter(&env_file)? {
        let (k, v) = item?;
        vars.insert(k, v);
    }
    assert_eq!(vars.len(), 2);
    assert_eq!(vars["DATABASE_URL"], "postgres://localhost/shop");

    let reloaded = KeyMaterial::from_json(&vars["SOLANA_ADMIN_PRIVATE_KEY"])?;
    assert_eq!(reloaded.public_address(), km.public_address());
    Ok(())
}

#[cfg(unix)]
#[test]
fn non_utf8_env_var_is_reported_not_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let var = "STOREFRONT_TEST_ENV_KEY_NOT_UTF8";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet-keypair.json");
    let from_file = KeyMaterial::generate();
    KeyStore::write_key_file(&path, &from_file, false).unwrap();

    std::env::set_var(var, OsStr::from_bytes(b"[\xff]"));

    let err = KeyStore::load_from_env(var).unwrap_err();
    assert!(matches!(err, WalletError::NotUtf8 { .. }), "got {err}");
    assert!(err.to_string().contains(var));

    // The key file must not silently stand in for an unreadable variable.
    let source = KeySource::EnvThenFile {
        var: var.to_string(),
        path,
    };
    let err = KeyStore::load(&source).unwrap_err();
    assert!(matches!(err, WalletError::NotUtf8 { .. }), "got {err}");

    std::env::remove_var(var);
}

#[test]
fn non_utf8_key_file_is_parse_class() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.json");
    fs::write(&path, [0xff, 0xfe, 0x5b, 0x31, 0x5d]).unwrap();

    let err = KeyStore::load_from_file(&path).unwrap_err();
    assert!(matches!(err, WalletError::NotUtf8 { .. }), "got {err}");
    assert!(err.to_string().contains("binary.json"));
}

#[test]
fn exported_env_assignment_keeps_export() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let env_file = dir.path().join(".env");
    fs::write(
        &env_file,
        "export DATABASE_URL=postgres://localhost/shop\nexport SOLANA_ADMIN_PRIVATE_KEY=[1,2,3]\n",
    )?;

    let km = KeyMaterial::generate();
    KeyStore::write_env_file(&env_file, "SOLANA_ADMIN_PRIVATE_KEY", &km)?;

    let contents = fs::read_to_string(&env_file)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "export DATABASE_URL=postgres://localhost/shop");

    let value = lines[1]
        .strip_prefix("export SOLANA_ADMIN_PRIVATE_KEY=")
        .expect("export prefix kept");
    assert_eq!(
        KeyMaterial::from_json(value)?.public_address(),
        km.public_address()
    );
    Ok(())
}
