//! Gate with a fixed answer, for tests and scripted use

use crate::auth::BiometricGate;
use crate::error::AuthError;
use std::sync::Mutex;

/// Answers every prompt the same way and remembers what it was asked
#[derive(Debug)]
pub struct StaticGate {
    outcome: Result<(), AuthError>,
    prompts: Mutex<Vec<String>>,
}

impl StaticGate {
    pub fn allow() -> Self {
        Self::with_outcome(Ok(()))
    }

    pub fn deny() -> Self {
        Self::with_outcome(Err(AuthError::Denied))
    }

    pub fn with_outcome(outcome: Result<(), AuthError>) -> Self {
        Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl BiometricGate for StaticGate {
    fn authenticate(&self, prompt: &str) -> Result<(), AuthError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.outcome.clone()
    }
}
