//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

use totp_core::auth::{platform_gate, BiometricGate};
use totp_core::clipboard::SystemClipboard;
use totp_core::config::Config;
use totp_core::manager::SecretManager;
use totp_core::store::KeyringStore;

pub mod add;
pub mod delete;
pub mod generate;
pub mod list;
pub mod retrieve;

/// Manager over the system keyring and the platform's biometric verifier
pub type PlatformManager = SecretManager<KeyringStore, Box<dyn BiometricGate>>;

pub fn platform_manager(config: &Config) -> PlatformManager {
    SecretManager::new(
        KeyringStore::new(config.service.clone()),
        platform_gate(config.biometric.as_ref()),
    )
}

pub fn platform_clipboard(config: &Config) -> SystemClipboard {
    SystemClipboard::new(config.clipboard.clone())
}
