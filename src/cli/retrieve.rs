//! `totp <name> [--copy]`
//!
//! Prints the current code for a stored secret and optionally copies it.
//! The code reaches stdout before the clipboard is touched, so a failed
//! copy still leaves the user with the code.

use totp_core::auth::BiometricGate;
use totp_core::clipboard::ClipboardSink;
use totp_core::error::TotpError;
use totp_core::manager::SecretManager;
use totp_core::store::CredentialStore;
use totp_core::types::RetrieveRequest;
use tracing::debug;

pub fn run_retrieve<S, G, C>(
    manager: &SecretManager<S, G>,
    request: &RetrieveRequest,
    clipboard: &C,
) -> Result<(), TotpError>
where
    S: CredentialStore,
    G: BiometricGate,
    C: ClipboardSink,
{
    let code = manager.retrieve(request)?;
    println!("{}", code.expose());

    if request.copy {
        clipboard.write(code.expose())?;
        debug!(name = %request.name, "code copied to clipboard");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use totp_core::auth::StaticGate;
    use totp_core::clipboard::MemoryClipboard;
    use totp_core::error::{AuthError, StoreError};
    use totp_core::store::MemoryStore;

    const SEED: &str = "JBSWY3DPEHPK3PXP";

    fn manager_with(gate: StaticGate) -> SecretManager<MemoryStore, StaticGate> {
        let manager = SecretManager::new(MemoryStore::new(), gate);
        manager.add("github", SEED).expect("Failed to add test secret");
        manager
    }

    #[test]
    fn test_copy_puts_code_on_clipboard() {
        let manager = manager_with(StaticGate::allow());
        let clipboard = MemoryClipboard::new();

        run_retrieve(&manager, &RetrieveRequest::new("github", true), &clipboard)
            .expect("retrieve should succeed");

        let copied = clipboard.contents().expect("clipboard should hold the code");
        assert_eq!(copied.len(), 6);
        assert!(copied.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_no_copy_without_flag() {
        let manager = manager_with(StaticGate::allow());
        let clipboard = MemoryClipboard::new();

        run_retrieve(&manager, &RetrieveRequest::new("github", false), &clipboard)
            .expect("retrieve should succeed");

        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_unknown_name_never_copies() {
        let manager = manager_with(StaticGate::allow());
        let clipboard = MemoryClipboard::new();

        let err = run_retrieve(&manager, &RetrieveRequest::new("gitlab", true), &clipboard)
            .unwrap_err();

        assert!(matches!(err, TotpError::Store(StoreError::NotFound { .. })));
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_denied_auth_never_copies() {
        let manager = manager_with(StaticGate::deny());
        let clipboard = MemoryClipboard::new();

        let err = run_retrieve(&manager, &RetrieveRequest::new("github", true), &clipboard)
            .unwrap_err();

        assert!(matches!(err, TotpError::Auth(AuthError::Denied)));
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let manager = manager_with(StaticGate::allow());
        let clipboard = MemoryClipboard::failing();

        let err = run_retrieve(&manager, &RetrieveRequest::new("github", true), &clipboard)
            .unwrap_err();

        assert!(matches!(err, TotpError::Clipboard(_)));
        assert_eq!(clipboard.contents(), None);
    }
}
