//! Credential store adapters
//!
//! Every record lives under one service namespace so entries written by
//! other tools never collide with ours. The store owns the seeds; callers
//! only ever see short-lived [`QueryResult`]s.

use crate::error::StoreError;
use crate::types::{OtpSecret, QueryResult};

#[cfg(target_os = "macos")]
pub mod apple;
pub mod backend;
pub mod keyring;
pub mod memory;

pub use self::backend::{EntryBackend, SecretBackend};
pub use self::keyring::KeyringStore;
pub use self::memory::MemoryStore;

/// Add/get/delete/list over a secret store scoped to one namespace
pub trait CredentialStore {
    /// Create a new record; fails with `AlreadyExists` rather than overwrite
    fn add(&self, name: &str, secret: &OtpSecret) -> Result<(), StoreError>;

    /// Remove the single record named `name`
    fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Fetch the seed stored under `name`
    ///
    /// Returns an empty vector when nothing matches. More than one entry
    /// means the platform reported several matches.
    fn get(&self, name: &str) -> Result<Vec<QueryResult>, StoreError>;

    /// Names of every record in the namespace, in store order, without seeds
    fn list(&self) -> Result<Vec<QueryResult>, StoreError>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for &T {
    fn add(&self, name: &str, secret: &OtpSecret) -> Result<(), StoreError> {
        (**self).add(name, secret)
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        (**self).delete(name)
    }

    fn get(&self, name: &str) -> Result<Vec<QueryResult>, StoreError> {
        (**self).get(name)
    }

    fn list(&self) -> Result<Vec<QueryResult>, StoreError> {
        (**self).list()
    }
}

impl<T: CredentialStore + ?Sized> CredentialStore for Box<T> {
    fn add(&self, name: &str, secret: &OtpSecret) -> Result<(), StoreError> {
        (**self).add(name, secret)
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        (**self).delete(name)
    }

    fn get(&self, name: &str) -> Result<Vec<QueryResult>, StoreError> {
        (**self).get(name)
    }

    fn list(&self) -> Result<Vec<QueryResult>, StoreError> {
        (**self).list()
    }
}
