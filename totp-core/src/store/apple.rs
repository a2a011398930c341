//! macOS Keychain backend
//!
//! Items are written as generic passwords that never sync to iCloud and
//! are only readable while the device has a passcode set, on this device.
//! `keyring`'s own macOS backend cannot set either attribute.

use super::backend::SecretBackend;
use security_framework::access_control::{ProtectionMode, SecAccessControl};
use security_framework::base::Error;
use security_framework::passwords::{
    delete_generic_password, get_generic_password, set_generic_password_options,
};
use security_framework::passwords_options::PasswordOptions;

/// errSecItemNotFound
const ITEM_NOT_FOUND: i32 = -25300;

/// Generic-password items in the login keychain
#[derive(Debug, Clone, Copy, Default)]
pub struct KeychainBackend;

impl SecretBackend for KeychainBackend {
    fn get(&self, service: &str, account: &str) -> keyring::Result<String> {
        let bytes = get_generic_password(service, account).map_err(decode_error)?;
        keyring::error::decode_password(bytes)
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> keyring::Result<()> {
        // Attributes are fixed at creation, so replace instead of update.
        match delete_generic_password(service, account) {
            Ok(()) => {}
            Err(e) if e.code() == ITEM_NOT_FOUND => {}
            Err(e) => return Err(decode_error(e)),
        }

        let access = SecAccessControl::create_with_protection(
            Some(ProtectionMode::AccessibleWhenPasscodeSetThisDeviceOnly),
            0,
        )
        .map_err(decode_error)?;

        let mut options = PasswordOptions::new_generic_password(service, account);
        options.set_access_control(access);
        options.set_access_synchronized(Some(false));

        set_generic_password_options(secret.as_bytes(), options).map_err(decode_error)
    }

    fn delete(&self, service: &str, account: &str) -> keyring::Result<()> {
        delete_generic_password(service, account).map_err(decode_error)
    }
}

fn decode_error(err: Error) -> keyring::Error {
    match err.code() {
        ITEM_NOT_FOUND => keyring::Error::NoEntry,
        // errSecNotAvailable, errSecReadOnly, errSecNoSuchKeychain, errSecInvalidKeychain
        -25291 | -25292 | -25294 | -25295 => keyring::Error::NoStorageAccess(Box::new(err)),
        _ => keyring::Error::PlatformFailure(Box::new(err)),
    }
}
