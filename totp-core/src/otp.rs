//! TOTP (Time-based One-Time Password) generation
//!
//! Implements RFC 6238 TOTP with the totp-lite crate: SHA-1, a 30 second
//! step and 6 digits, the defaults every authenticator app agrees on.

use crate::error::OtpError;
use crate::types::{OtpCode, OtpSecret};
use base32::Alphabet;
use std::time::{SystemTime, UNIX_EPOCH};
use totp_lite::Sha1;

/// RFC 6238 default time step in seconds
pub const TIME_STEP: u64 = 30;

/// Number of digits in a generated code
pub const DIGITS: u32 = 6;

/// Generate the code for the current time window
pub fn now(secret: &OtpSecret) -> Result<OtpCode, OtpError> {
    let current_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| OtpError::TimeError)?
        .as_secs();

    at(secret, current_time)
}

/// Generate the code for the window containing `unix_seconds`
pub fn at(secret: &OtpSecret, unix_seconds: u64) -> Result<OtpCode, OtpError> {
    let key = decode_secret(secret.expose())?;
    let token = totp_lite::totp_custom::<Sha1>(TIME_STEP, DIGITS, &key, unix_seconds);
    Ok(OtpCode::new(token))
}

/// Decode a Base32 seed the way authenticator apps accept it
///
/// Whitespace is ignored, letters are case-insensitive and trailing
/// padding is optional. A seed with nothing left after cleaning, or with a
/// length no Base32 encoder produces, is rejected.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>, OtpError> {
    let cleaned: String = secret
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    let unpadded = cleaned.trim_end_matches('=');

    if !unpadded
        .chars()
        .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c))
    {
        return Err(OtpError::InvalidBase32);
    }

    // A final group never holds 1, 3 or 6 symbols
    if unpadded.is_empty() || matches!(unpadded.len() % 8, 1 | 3 | 6) {
        return Err(OtpError::InvalidBase32);
    }

    base32::decode(Alphabet::RFC4648 { padding: false }, unpadded).ok_or(OtpError::InvalidBase32)
}
