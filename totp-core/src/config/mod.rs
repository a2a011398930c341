//! Configuration module
//!
//! Optional overrides loaded from a TOML file. Every field has a default,
//! and a missing file means all defaults.

use crate::types::DEFAULT_SERVICE;
use serde::{Deserialize, Serialize};

pub mod toml_config;

/// An external program with its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Settings for one run of the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Keyring service namespace holding the seeds
    pub service: String,

    /// Clipboard setter overriding platform detection
    pub clipboard: Option<CommandSpec>,

    /// Biometric verifier overriding the platform default
    pub biometric: Option<CommandSpec>,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.service.is_empty() {
            return Err("Service cannot be empty".to_string());
        }

        if self.service.chars().any(char::is_whitespace) {
            return Err("Service cannot contain whitespace".to_string());
        }

        if let Some(clipboard) = &self.clipboard {
            if clipboard.program.trim().is_empty() {
                return Err("Clipboard program cannot be empty".to_string());
            }
        }

        if let Some(biometric) = &self.biometric {
            if biometric.program.trim().is_empty() {
                return Err("Biometric program cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            clipboard: None,
            biometric: None,
        }
    }
}
