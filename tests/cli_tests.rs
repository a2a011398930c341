//! Integration tests for the totp binary
//!
//! Runs the built executable. Nothing here writes to the system keyring:
//! store-backed commands are only exercised on paths that stop earlier
//! (bad config, refused verification) or only read (`ls`).

use std::path::Path;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

const TOTP_BINARY: &str = env!("CARGO_BIN_EXE_totp");
const TEST_SECRET: &str = "JBSWY3DPEHPK3PXP";

fn run_totp(args: &[&str], config_dir: &Path) -> Output {
    Command::new(TOTP_BINARY)
        .args(args)
        .env("TOTP_CONFIG_DIR", config_dir)
        .output()
        .expect("Failed to run totp")
}

fn reference_code(secret: &str) -> String {
    let key = base32::decode(base32::Alphabet::RFC4648 { padding: false }, secret)
        .expect("Valid Base32");
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs();
    totp_lite::totp_custom::<totp_lite::Sha1>(30, 6, &key, now)
}

#[test]
fn test_no_arguments_prints_help() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_totp(&[], config_dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "help expected, got: {}", stdout);
    for command in ["gen", "add", "ls", "del"] {
        assert!(stdout.contains(command), "help should list {}", command);
    }
}

#[test]
fn test_gen_prints_current_code() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let before = reference_code(TEST_SECRET);
    let output = run_totp(&["gen", TEST_SECRET], config_dir.path());
    let after = reference_code(TEST_SECRET);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert!(
        stdout == before || stdout == after,
        "code {} matches neither {} nor {}",
        stdout,
        before,
        after
    );
}

#[test]
fn test_gen_empty_secret() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_totp(&["gen", ""], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No secret was given"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_gen_invalid_secret() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_totp(&["gen", "not base32!"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid Base32"));
}

#[test]
fn test_gen_rejects_seeds_that_decode_to_nothing() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");

    for secret in ["A", "   "] {
        let output = run_totp(&["gen", secret], config_dir.path());
        assert_eq!(output.status.code(), Some(1), "secret {:?}", secret);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid Base32"));
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_gen_requires_exactly_one_argument() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");

    assert_eq!(run_totp(&["gen"], config_dir.path()).status.code(), Some(2));
    assert_eq!(
        run_totp(&["gen", "A", "B"], config_dir.path()).status.code(),
        Some(2)
    );
}

#[test]
fn test_add_requires_two_arguments() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    assert_eq!(
        run_totp(&["add", "github"], config_dir.path()).status.code(),
        Some(2)
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(config_dir.path().join("config.toml"), "service = \"\"\n")
        .expect("Failed to write config file");

    let output = run_totp(&["ls"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_home_uses_defaults() {
    let output = Command::new(TOTP_BINARY)
        .arg("ls")
        .env_remove("HOME")
        .env_remove("TOTP_CONFIG_DIR")
        .output()
        .expect("Failed to run totp");

    // Whatever the keyring says, the run must not stop at configuration.
    assert_ne!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Configuration"), "stderr: {}", stderr);
    assert!(!stderr.contains("HOME"), "stderr: {}", stderr);
}

#[cfg(unix)]
fn refusing_verifier_config(dir: &Path) {
    std::fs::write(
        dir.join("config.toml"),
        r#"
service = "__totp_cli_test__"

[biometric]
program = "false"
"#,
    )
    .expect("Failed to write config file");
}

#[cfg(unix)]
#[test]
fn test_refused_verification_blocks_retrieve() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    refusing_verifier_config(config_dir.path());

    let output = run_totp(&["github", "--copy"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to authenticate"));
    assert!(output.stdout.is_empty(), "no code may be printed");
}

#[cfg(unix)]
#[test]
fn test_refused_verification_blocks_delete() {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    refusing_verifier_config(config_dir.path());

    let output = run_totp(&["del", "github"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to authenticate"));
    assert!(!stderr.contains("Successfully deleted"));
}
