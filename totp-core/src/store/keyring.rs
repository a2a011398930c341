//! Keyring-backed credential store
//!
//! Uses the system keyring (macOS Keychain, Secret Service on Linux,
//! Credential Manager on Windows). Records are keyed by (service, name).
//!
//! The keyring API cannot enumerate entries, so the names are also kept
//! as a JSON array in a companion entry under `<service>.index`. The index
//! follows the records: a name whose record is gone is dropped on delete,
//! and a record found without an index line is added back.

use crate::error::StoreError;
use crate::store::backend::{PlatformBackend, SecretBackend};
use crate::store::CredentialStore;
use crate::types::{OtpSecret, QueryResult, DEFAULT_SERVICE};
use tracing::{debug, warn};

/// Account holding the JSON name index
const INDEX_ACCOUNT: &str = "names";

/// Store backed by the platform keyring
#[derive(Debug, Clone)]
pub struct KeyringStore<B = PlatformBackend> {
    service: String,
    index_service: String,
    backend: B,
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self::with_backend(service, PlatformBackend::default())
    }
}

impl<B: SecretBackend> KeyringStore<B> {
    pub fn with_backend(service: impl Into<String>, backend: B) -> Self {
        let service = service.into();
        let index_service = format!("{}.index", service);
        Self {
            service,
            index_service,
            backend,
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn read_index(&self) -> Result<Vec<String>, StoreError> {
        match self.backend.get(&self.index_service, INDEX_ACCOUNT) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::CorruptIndex {
                reason: e.to_string(),
            }),
            Err(keyring::Error::NoEntry) => Ok(Vec::new()),
            Err(e) => Err(map_keyring_error(INDEX_ACCOUNT, e)),
        }
    }

    fn write_index(&self, names: &[String]) -> Result<(), StoreError> {
        if names.is_empty() {
            return match self.backend.delete(&self.index_service, INDEX_ACCOUNT) {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(map_keyring_error(INDEX_ACCOUNT, e)),
            };
        }

        let raw = serde_json::to_string(names).map_err(|e| StoreError::CorruptIndex {
            reason: e.to_string(),
        })?;
        self.backend
            .set(&self.index_service, INDEX_ACCOUNT, &raw)
            .map_err(|e| map_keyring_error(INDEX_ACCOUNT, e))
    }

    /// Append `name` to the index unless it is already listed
    fn remember(&self, name: &str) -> Result<(), StoreError> {
        let mut names = self.read_index()?;
        if names.iter().any(|n| n == name) {
            return Ok(());
        }
        names.push(name.to_string());
        self.write_index(&names)
    }

    /// Drop `name` from the index if it is listed
    fn forget(&self, name: &str) -> Result<(), StoreError> {
        let mut names = self.read_index()?;
        let before = names.len();
        names.retain(|n| n != name);
        if names.len() == before {
            return Ok(());
        }
        self.write_index(&names)
    }

    /// Index a record that exists but is not listed. Lookups still succeed
    /// when this fails.
    fn reindex(&self, name: &str) {
        if let Err(e) = self.remember(name) {
            warn!(name, error = %e, "failed to index existing keyring entry");
        }
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE)
    }
}

impl<B: SecretBackend> CredentialStore for KeyringStore<B> {
    fn add(&self, name: &str, secret: &OtpSecret) -> Result<(), StoreError> {
        match self.backend.get(&self.service, name) {
            Ok(_) | Err(keyring::Error::Ambiguous(_)) => {
                self.reindex(name);
                return Err(StoreError::AlreadyExists {
                    name: name.to_string(),
                });
            }
            Err(keyring::Error::NoEntry) => {}
            Err(e) => return Err(map_keyring_error(name, e)),
        }

        self.backend
            .set(&self.service, name, secret.expose())
            .map_err(|e| map_keyring_error(name, e))?;
        debug!(service = %self.service, name, "stored secret in keyring");

        if let Err(e) = self.remember(name) {
            warn!(name, "failed to update keyring index, rolling back");
            let _ = self.backend.delete(&self.service, name);
            return Err(e);
        }

        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let removed = self.backend.delete(&self.service, name);
        if let Err(keyring::Error::NoEntry) = removed {
            debug!(service = %self.service, name, "no keyring entry, pruning index");
            self.forget(name)?;
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        removed.map_err(|e| map_keyring_error(name, e))?;
        debug!(service = %self.service, name, "deleted secret from keyring");

        self.forget(name)
    }

    fn get(&self, name: &str) -> Result<Vec<QueryResult>, StoreError> {
        match self.backend.get(&self.service, name) {
            Ok(secret) => {
                self.reindex(name);
                Ok(vec![QueryResult::with_secret(name, OtpSecret::new(secret))])
            }
            Err(keyring::Error::NoEntry) => Ok(Vec::new()),
            Err(keyring::Error::Ambiguous(entries)) => {
                debug!(name, matches = entries.len(), "keyring lookup is ambiguous");
                Ok(entries
                    .iter()
                    .map(|_| QueryResult::name_only(name))
                    .collect())
            }
            Err(e) => Err(map_keyring_error(name, e)),
        }
    }

    fn list(&self) -> Result<Vec<QueryResult>, StoreError> {
        Ok(self
            .read_index()?
            .into_iter()
            .map(QueryResult::name_only)
            .collect())
    }
}

/// Translate a keyring error into the store taxonomy
fn map_keyring_error(name: &str, error: keyring::Error) -> StoreError {
    match error {
        keyring::Error::NoEntry => StoreError::NotFound {
            name: name.to_string(),
        },
        keyring::Error::NoStorageAccess(e) | keyring::Error::PlatformFailure(e) => {
            StoreError::Unavailable {
                reason: e.to_string(),
            }
        }
        other => StoreError::Failure {
            reason: other.to_string(),
        },
    }
}
