//! Core library for the totp secrets manager
//!
//! This crate provides the credential store adapters, the biometric gate,
//! TOTP generation and the policy that ties them together.

pub mod error;
pub mod types;

pub mod auth;
pub mod clipboard;
pub mod config;
pub mod manager;
pub mod otp;
pub mod store;

/// Initialize logging infrastructure
///
/// Logs go to stderr so stdout only carries codes and names. Warnings and
/// errors are shown by default; `verbose` enables debug output.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(level)
        .try_init()?;

    Ok(())
}
