//! TOML configuration file I/O
//!
//! Loads the optional configuration file from the user's configuration
//! directory.

use crate::config::Config;
use crate::error::{ConfigError, TotpError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "TOTP_CONFIG_DIR";

fn resolve_config_dir(override_dir: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(config_dir) = override_dir {
        return Some(PathBuf::from(config_dir));
    }
    home.map(|home| PathBuf::from(home).join(".config").join("totp"))
}

/// Get the configuration directory
///
/// Returns `$TOTP_CONFIG_DIR` if set, otherwise `~/.config/totp`.
pub fn get_config_dir() -> Result<PathBuf, TotpError> {
    resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV), std::env::var_os("HOME"))
        .ok_or_else(|| ConfigError::NoHomeDir.into())
}

/// Get the configuration file path
pub fn get_config_path() -> Result<PathBuf, TotpError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default location
///
/// The file is optional, so having no directory to look in (no `HOME` and
/// no `$TOTP_CONFIG_DIR`) also yields the defaults.
pub fn load_config() -> Result<Config, TotpError> {
    match resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV), std::env::var_os("HOME")) {
        Some(dir) => load_config_from_path(dir.join(CONFIG_FILE_NAME)),
        None => {
            debug!("Neither HOME nor {} is set, using defaults", CONFIG_DIR_ENV);
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific TOML file
///
/// A missing file yields the defaults.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<Config, TotpError> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(ConfigError::LoadFailed {
                path: path.to_string_lossy().to_string(),
                message: e.to_string(),
            }
            .into())
        }
    };

    let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed {
        path: path.to_string_lossy().to_string(),
        message: e.to_string(),
    })?;

    config
        .validate()
        .map_err(|message| ConfigError::ValidationError { message })?;

    debug!("Loaded configuration from {:?}", path);
    Ok(config)
}
