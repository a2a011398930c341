//! `totp del <name>`

use totp_core::auth::BiometricGate;
use totp_core::error::TotpError;
use totp_core::manager::SecretManager;
use totp_core::store::CredentialStore;

pub fn run_delete<S: CredentialStore, G: BiometricGate>(
    manager: &SecretManager<S, G>,
    name: &str,
) -> Result<(), TotpError> {
    manager.delete(name)?;
    eprintln!("Successfully deleted \"{}\".", name);
    Ok(())
}
