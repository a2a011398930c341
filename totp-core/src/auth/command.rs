//! Gates backed by an external verifier process

use crate::auth::BiometricGate;
use crate::config::CommandSpec;
use crate::error::AuthError;
use std::io;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Runs a verifier executable; exit status 0 means the user was verified
///
/// The verifier shares our terminal. Its stdout is sent to stderr so that
/// stdout only ever carries codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGate {
    program: String,
    args: Vec<String>,
}

impl CommandGate {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_spec(spec: &CommandSpec) -> Self {
        Self::new(spec.program.clone(), spec.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl BiometricGate for CommandGate {
    fn authenticate(&self, prompt: &str) -> Result<(), AuthError> {
        eprintln!("{}", prompt);
        debug!(program = %self.program, "running biometric verifier");

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AuthError::Unavailable {
                    reason: format!("{} not found", self.program),
                },
                _ => AuthError::Unavailable {
                    reason: format!("failed to run {}: {}", self.program, e),
                },
            })?;

        if status.success() {
            Ok(())
        } else {
            warn!(program = %self.program, %status, "biometric verification failed");
            Err(AuthError::Denied)
        }
    }
}

/// Gate for platforms with no verifier; every prompt fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableGate {
    reason: String,
}

impl UnavailableGate {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl BiometricGate for UnavailableGate {
    fn authenticate(&self, _prompt: &str) -> Result<(), AuthError> {
        Err(AuthError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_zero_exit_is_success() {
        let gate = CommandGate::new("true", Vec::new());
        assert_eq!(gate.authenticate("test"), Ok(()));
    }

    #[test]
    fn test_nonzero_exit_is_denied() {
        let gate = CommandGate::new("false", Vec::new());
        assert_eq!(gate.authenticate("test"), Err(AuthError::Denied));
    }

    #[test]
    fn test_args_are_passed() {
        let gate = CommandGate::new("sh", vec!["-c".to_string(), "exit 3".to_string()]);
        assert_eq!(gate.authenticate("test"), Err(AuthError::Denied));
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let gate = CommandGate::new("__totp_no_such_verifier__", Vec::new());
        assert!(matches!(
            gate.authenticate("test"),
            Err(AuthError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_unavailable_gate_always_fails() {
        let gate = UnavailableGate::new("none");
        assert_eq!(
            gate.authenticate("test"),
            Err(AuthError::Unavailable {
                reason: "none".to_string()
            })
        );
    }
}
