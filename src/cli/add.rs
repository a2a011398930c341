//! `totp add <name> <secret>`

use totp_core::auth::BiometricGate;
use totp_core::error::TotpError;
use totp_core::manager::SecretManager;
use totp_core::store::CredentialStore;

pub fn run_add<S: CredentialStore, G: BiometricGate>(
    manager: &SecretManager<S, G>,
    name: &str,
    secret: &str,
) -> Result<(), TotpError> {
    manager.add(name, secret)?;
    eprintln!("secret successfully registered as \"{}\".", name);
    Ok(())
}
