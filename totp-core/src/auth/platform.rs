//! Native verification through the OS (Touch ID on macOS, Windows Hello)

use crate::auth::BiometricGate;
use crate::error::AuthError;
use robius_authentication::{
    AndroidText, BiometricStrength, Context, PolicyBuilder, Text, WindowsText,
};
use tracing::{debug, warn};

/// Dialog title where the platform shows one
const DIALOG_TITLE: &str = "totp";

/// Asks the OS to verify the user: strong biometrics, falling back to the
/// device password where the platform offers it
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformGate;

impl PlatformGate {
    pub fn new() -> Self {
        Self
    }
}

impl BiometricGate for PlatformGate {
    fn authenticate(&self, prompt: &str) -> Result<(), AuthError> {
        let policy = PolicyBuilder::new()
            .biometrics(Some(BiometricStrength::Strong))
            .password(true)
            .build()
            .ok_or_else(|| AuthError::Unavailable {
                reason: "platform authentication is not supported on this device".to_string(),
            })?;

        let windows = WindowsText::new(DIALOG_TITLE, prompt).ok_or_else(|| {
            AuthError::Unavailable {
                reason: format!("prompt is too long for the system dialog: {}", prompt),
            }
        })?;
        let text = Text {
            android: AndroidText {
                title: DIALOG_TITLE,
                subtitle: None,
                description: None,
            },
            apple: prompt,
            windows,
        };

        debug!(prompt, "requesting platform authentication");
        Context::new(())
            .blocking_authenticate(text, &policy)
            .map_err(|e| {
                warn!(error = ?e, "platform authentication failed");
                AuthError::Denied
            })
    }
}
