//! Error types for the totp secrets manager
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the totp application
#[derive(Error, Debug)]
pub enum TotpError {
    /// Missing or malformed user input, reported before any side effect
    #[error("{message}")]
    Validation { message: String },

    /// Errors related to credential store operations
    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the biometric gate
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Errors related to OTP/TOTP operations
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Errors from the clipboard sink
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// A lookup matched something other than exactly one record
    #[error("Name \"{name}\" is ambiguous: {count} records matched")]
    Ambiguous { name: String, count: usize },

    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TotpError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Credential store operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("A secret named \"{name}\" already exists")]
    AlreadyExists { name: String },

    #[error("Given name \"{name}\" is not found")]
    NotFound { name: String },

    #[error("Credential store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Credential store operation failed: {reason}")]
    Failure { reason: String },

    #[error("Credential index is corrupt: {reason}")]
    CorruptIndex { reason: String },
}

/// Biometric gate errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Failed to authenticate")]
    Denied,

    #[error("Biometric authentication unavailable: {reason}")]
    Unavailable { reason: String },
}

/// OTP/TOTP operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Invalid Base32 secret")]
    InvalidBase32,

    #[error("System time error")]
    TimeError,
}

/// Clipboard sink errors
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard program found")]
    Unavailable,

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to {program}: {source}")]
    Write {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: String },

    #[error("Clipboard write rejected: {reason}")]
    Rejected { reason: String },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {message}")]
    LoadFailed { path: String, message: String },

    #[error("Failed to parse configuration file {path}: {message}")]
    ParseFailed { path: String, message: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("HOME environment variable not set")]
    NoHomeDir,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TotpError>;
