//! `totp gen <secret>`

use totp_core::error::TotpError;
use totp_core::manager;

/// Print the current code for a secret given on the command line
pub fn run_gen(secret: &str) -> Result<(), TotpError> {
    let code = manager::generate(secret)?;
    println!("{}", code.expose());
    Ok(())
}
