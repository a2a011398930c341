//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};

/// Default keyring service namespace for stored seeds
pub const DEFAULT_SERVICE: &str = "totp";

/// Wrapper for a Base32 TOTP seed read from or written to the store
///
/// This type ensures seeds are never accidentally logged or exposed
/// in debug output.
#[derive(Clone, Debug)]
pub struct OtpSecret(Secret<String>);

impl OtpSecret {
    pub fn new(secret: String) -> Self {
        Self(Secret::new(secret))
    }

    /// Expose the secret value (use with caution!)
    ///
    /// This should only be called when passing to the keyring or to the
    /// OTP engine.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<String> for OtpSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for OtpSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret.to_string())
    }
}

/// Wrapper for a generated one-time code
///
/// Codes are short-lived but still treated as sensitive: never logged.
#[derive(Clone, Debug)]
pub struct OtpCode(Secret<String>);

impl OtpCode {
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value
    ///
    /// Only for writing to stdout or the clipboard.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OtpCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// Read-only projection of a stored record
///
/// `secret` is only populated by single-record lookups; listings carry
/// names alone.
#[derive(Clone, Debug)]
pub struct QueryResult {
    pub name: String,
    pub secret: Option<OtpSecret>,
}

impl QueryResult {
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: None,
        }
    }

    pub fn with_secret(name: impl Into<String>, secret: OtpSecret) -> Self {
        Self {
            name: name.into(),
            secret: Some(secret),
        }
    }
}

/// Per-invocation request for the default (retrieve) command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetrieveRequest {
    /// Name of the stored secret
    pub name: String,
    /// Also copy the code to the system clipboard
    pub copy: bool,
}

impl RetrieveRequest {
    pub fn new(name: impl Into<String>, copy: bool) -> Self {
        Self {
            name: name.into(),
            copy,
        }
    }
}
