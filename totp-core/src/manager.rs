//! Secret manager
//!
//! Ties the credential store, the biometric gate and the OTP engine
//! together. Anything that reveals or destroys a stored seed is gated;
//! adding and listing are not (a listing carries names only).

use crate::auth::{BiometricGate, DELETE_PROMPT, RETRIEVE_PROMPT};
use crate::error::{Result, StoreError, TotpError};
use crate::otp;
use crate::store::CredentialStore;
use crate::types::{OtpCode, OtpSecret, RetrieveRequest};
use tracing::{debug, info};

/// Code for a literal secret; touches neither store nor gate
pub fn generate(secret: &str) -> Result<OtpCode> {
    if secret.is_empty() {
        return Err(TotpError::validation("No secret was given"));
    }
    Ok(otp::now(&OtpSecret::from(secret))?)
}

pub struct SecretManager<S, G> {
    store: S,
    gate: G,
}

impl<S: CredentialStore, G: BiometricGate> SecretManager<S, G> {
    pub fn new(store: S, gate: G) -> Self {
        Self { store, gate }
    }

    /// Persist a new seed under `name`
    pub fn add(&self, name: &str, secret: &str) -> Result<()> {
        require_name(name)?;
        if secret.is_empty() {
            return Err(TotpError::validation("No secret was given"));
        }
        // reject seeds that could never produce a code
        otp::decode_secret(secret)?;

        self.store.add(name, &OtpSecret::from(secret))?;
        info!(name, "registered secret");
        Ok(())
    }

    /// Stored names, in store order
    pub fn list(&self) -> Result<Vec<String>> {
        let names: Vec<String> = self.store.list()?.into_iter().map(|r| r.name).collect();
        debug!(count = names.len(), "listed secrets");
        Ok(names)
    }

    /// Delete `name` once the user has been verified
    pub fn delete(&self, name: &str) -> Result<()> {
        require_name(name)?;
        self.gate
            .authenticate(&format!("{} \"{}\"", DELETE_PROMPT, name))?;

        self.store.delete(name)?;
        info!(name, "deleted secret");
        Ok(())
    }

    /// Current code for a stored seed once the user has been verified
    ///
    /// Copying is left to the caller; `request.copy` only travels with
    /// the request.
    pub fn retrieve(&self, request: &RetrieveRequest) -> Result<OtpCode> {
        require_name(&request.name)?;
        self.gate.authenticate(RETRIEVE_PROMPT)?;

        let mut results = self.store.get(&request.name)?;
        match results.len() {
            0 => {
                return Err(StoreError::NotFound {
                    name: request.name.clone(),
                }
                .into())
            }
            1 => {}
            count => {
                return Err(TotpError::Ambiguous {
                    name: request.name.clone(),
                    count,
                })
            }
        }

        let secret = results
            .pop()
            .and_then(|r| r.secret)
            .ok_or_else(|| StoreError::Failure {
                reason: format!("no secret data returned for \"{}\"", request.name),
            })?;
        debug!(name = %request.name, "computing code for stored secret");
        Ok(otp::now(&secret)?)
    }
}

fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TotpError::validation("No name was given"));
    }
    Ok(())
}
