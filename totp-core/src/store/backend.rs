//! Raw slot access for the keyring store
//!
//! A backend reads, writes and removes one secret addressed by
//! (service, account). Errors use the `keyring` crate's taxonomy on every
//! platform so the store maps them in one place.

use keyring::Entry;

/// One (service, account) slot in a platform secret store
pub trait SecretBackend {
    fn get(&self, service: &str, account: &str) -> keyring::Result<String>;

    /// Create or replace the slot's secret
    fn set(&self, service: &str, account: &str, secret: &str) -> keyring::Result<()>;

    fn delete(&self, service: &str, account: &str) -> keyring::Result<()>;
}

impl<T: SecretBackend + ?Sized> SecretBackend for &T {
    fn get(&self, service: &str, account: &str) -> keyring::Result<String> {
        (**self).get(service, account)
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> keyring::Result<()> {
        (**self).set(service, account, secret)
    }

    fn delete(&self, service: &str, account: &str) -> keyring::Result<()> {
        (**self).delete(service, account)
    }
}

/// Backend going through `keyring::Entry` (Secret Service, Credential Manager)
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryBackend;

impl SecretBackend for EntryBackend {
    fn get(&self, service: &str, account: &str) -> keyring::Result<String> {
        Entry::new(service, account)?.get_password()
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> keyring::Result<()> {
        Entry::new(service, account)?.set_password(secret)
    }

    fn delete(&self, service: &str, account: &str) -> keyring::Result<()> {
        Entry::new(service, account)?.delete_credential()
    }
}

/// Backend used by [`KeyringStore::new`](super::KeyringStore::new)
#[cfg(target_os = "macos")]
pub type PlatformBackend = super::apple::KeychainBackend;

/// Backend used by [`KeyringStore::new`](super::KeyringStore::new)
#[cfg(not(target_os = "macos"))]
pub type PlatformBackend = EntryBackend;
