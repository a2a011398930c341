//! In-memory credential store
//!
//! Same contract as the keyring store without touching the system
//! keyring. Used by tests and anywhere a throwaway store is wanted.

use crate::error::StoreError;
use crate::store::CredentialStore;
use crate::types::{OtpSecret, QueryResult};
use std::sync::{Mutex, MutexGuard};

/// Insertion-ordered store held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<(String, OtpSecret)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<(String, OtpSecret)>>, StoreError> {
        self.records.lock().map_err(|_| StoreError::Unavailable {
            reason: "memory store lock poisoned".to_string(),
        })
    }
}

impl CredentialStore for MemoryStore {
    fn add(&self, name: &str, secret: &OtpSecret) -> Result<(), StoreError> {
        let mut records = self.lock()?;
        if records.iter().any(|(n, _)| n == name) {
            return Err(StoreError::AlreadyExists {
                name: name.to_string(),
            });
        }
        records.push((name.to_string(), secret.clone()));
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut records = self.lock()?;
        let position = records
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })?;
        records.remove(position);
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Vec<QueryResult>, StoreError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|(n, _)| n == name)
            .take(1)
            .map(|(n, secret)| QueryResult::with_secret(n.clone(), secret.clone()))
            .collect())
    }

    fn list(&self) -> Result<Vec<QueryResult>, StoreError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .map(|(n, _)| QueryResult::name_only(n.clone()))
            .collect())
    }
}
