//! `totp ls`

use totp_core::auth::BiometricGate;
use totp_core::error::TotpError;
use totp_core::manager::SecretManager;
use totp_core::store::CredentialStore;

/// Print every stored name, one per line, in store order
pub fn run_list<S: CredentialStore, G: BiometricGate>(
    manager: &SecretManager<S, G>,
) -> Result<(), TotpError> {
    for name in manager.list()? {
        println!("{}", name);
    }
    Ok(())
}
