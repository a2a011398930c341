//! Biometric gate
//!
//! A blocking prompt-and-verify step in front of operations that reveal or
//! destroy a stored seed. The verification itself belongs to the platform;
//! this module only runs it and reports the answer.

use crate::config::CommandSpec;
use crate::error::AuthError;

pub mod command;
pub mod fixed;
#[cfg(any(target_os = "macos", target_os = "windows"))]
pub mod platform;

pub use command::{CommandGate, UnavailableGate};
pub use fixed::StaticGate;
#[cfg(any(target_os = "macos", target_os = "windows"))]
pub use platform::PlatformGate;

/// Prompt used before revealing a stored seed
pub const RETRIEVE_PROMPT: &str = "access totp code";

/// Prompt used before deleting a stored seed
pub const DELETE_PROMPT: &str = "delete totp secret";

/// Verifier used on Linux when none is configured
pub const FPRINTD_VERIFY: &str = "fprintd-verify";

/// Blocks until the user has been verified or has failed to be
pub trait BiometricGate {
    fn authenticate(&self, prompt: &str) -> Result<(), AuthError>;
}

impl<T: BiometricGate + ?Sized> BiometricGate for &T {
    fn authenticate(&self, prompt: &str) -> Result<(), AuthError> {
        (**self).authenticate(prompt)
    }
}

impl<T: BiometricGate + ?Sized> BiometricGate for Box<T> {
    fn authenticate(&self, prompt: &str) -> Result<(), AuthError> {
        (**self).authenticate(prompt)
    }
}

/// Verifier used when config.toml names none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultVerifier {
    /// `fprintd-verify` as a child process
    Fprintd,
    /// The OS prompt: Touch ID on macOS, Windows Hello on Windows
    Platform,
    None,
}

pub fn default_verifier() -> DefaultVerifier {
    if cfg!(target_os = "linux") {
        DefaultVerifier::Fprintd
    } else if cfg!(any(target_os = "macos", target_os = "windows")) {
        DefaultVerifier::Platform
    } else {
        DefaultVerifier::None
    }
}

/// Pick the gate for this platform, honouring a configured verifier
pub fn platform_gate(verifier: Option<&CommandSpec>) -> Box<dyn BiometricGate> {
    if let Some(spec) = verifier {
        return Box::new(CommandGate::from_spec(spec));
    }

    match default_verifier() {
        DefaultVerifier::Fprintd => Box::new(CommandGate::new(FPRINTD_VERIFY, Vec::new())),
        #[cfg(any(target_os = "macos", target_os = "windows"))]
        DefaultVerifier::Platform => Box::new(PlatformGate::new()),
        _ => Box::new(UnavailableGate::new(
            "no biometric verifier for this platform; set [biometric] in config.toml",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_verifier_matches_platform() {
        let expected = if cfg!(target_os = "linux") {
            DefaultVerifier::Fprintd
        } else if cfg!(any(target_os = "macos", target_os = "windows")) {
            DefaultVerifier::Platform
        } else {
            DefaultVerifier::None
        };
        assert_eq!(default_verifier(), expected);
    }

    #[cfg(any(target_os = "macos", target_os = "windows"))]
    #[test]
    fn test_macos_and_windows_have_a_native_verifier() {
        assert_eq!(default_verifier(), DefaultVerifier::Platform);
    }

    #[cfg(unix)]
    #[test]
    fn test_configured_verifier_wins() {
        let allow = CommandSpec::new("true", Vec::new());
        assert_eq!(platform_gate(Some(&allow)).authenticate("test"), Ok(()));

        let refuse = CommandSpec::new("false", Vec::new());
        assert_eq!(
            platform_gate(Some(&refuse)).authenticate("test"),
            Err(AuthError::Denied)
        );
    }
}
