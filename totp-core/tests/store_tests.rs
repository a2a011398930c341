//! Store contract tests through the secret manager
//!
//! Run against the in-memory store so they need no system keyring.

use totp_core::auth::StaticGate;
use totp_core::error::{StoreError, TotpError};
use totp_core::manager::SecretManager;
use totp_core::store::{CredentialStore, MemoryStore};
use totp_core::types::OtpSecret;

#[test]
fn test_add_then_list_includes_name_once() {
    let manager = SecretManager::new(MemoryStore::new(), StaticGate::allow());
    manager.add("foo", "SECRETSEED").expect("Failed to add secret");

    let names = manager.list().expect("Failed to list");
    assert_eq!(names, vec!["foo".to_string()]);
}

#[test]
fn test_add_delete_then_list_excludes_name() {
    let manager = SecretManager::new(MemoryStore::new(), StaticGate::allow());
    manager.add("foo", "SECRETSEED").expect("Failed to add secret");
    manager.delete("foo").expect("Failed to delete secret");

    let names = manager.list().expect("Failed to list");
    assert!(!names.contains(&"foo".to_string()));
}

#[test]
fn test_duplicate_name_is_rejected() {
    let manager = SecretManager::new(MemoryStore::new(), StaticGate::allow());
    manager.add("foo", "SECRETSEED").expect("Failed to add secret");

    match manager.add("foo", "OTHERSEEDS") {
        Err(TotpError::Store(StoreError::AlreadyExists { name })) => assert_eq!(name, "foo"),
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
    assert_eq!(manager.list().expect("Failed to list").len(), 1);
}

#[test]
fn test_list_never_carries_secrets() {
    let store = MemoryStore::new();
    store
        .add("foo", &OtpSecret::from("SECRETSEED"))
        .expect("Failed to add secret");
    store
        .add("bar", &OtpSecret::from("SECRETSEED"))
        .expect("Failed to add secret");

    let listed = store.list().expect("Failed to list");
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| r.secret.is_none()));
}

#[test]
fn test_get_returns_at_most_one() {
    let store = MemoryStore::new();
    store
        .add("foo", &OtpSecret::from("SECRETSEED"))
        .expect("Failed to add secret");

    assert_eq!(store.get("foo").expect("get").len(), 1);
    assert!(store.get("bar").expect("get").is_empty());
}
