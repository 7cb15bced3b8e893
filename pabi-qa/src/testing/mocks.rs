//! Scripted suite executors for testing.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

use crate::core::Outcome;
use crate::errors::HarnessError;
use crate::suites::SuiteExecutor;

/// Scripted behavior for one suite target.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// Return a structured outcome.
    Outcome(Outcome),
    /// Fail with a setup error, simulating an unexpected failure.
    Error(String),
}

/// A suite executor that records calls and returns scripted responses.
///
/// Targets without a script return [`Outcome::Success`].
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: RwLock<HashMap<String, ScriptedResponse>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    /// Creates an executor where every target succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a success for the target.
    #[must_use]
    pub fn with_success(self, target: impl Into<String>) -> Self {
        self.responses.write().insert(
            target.into(),
            ScriptedResponse::Outcome(Outcome::Success),
        );
        self
    }

    /// Scripts a structured failure for the target.
    #[must_use]
    pub fn with_failure(self, target: impl Into<String>, code: i32) -> Self {
        self.responses.write().insert(
            target.into(),
            ScriptedResponse::Outcome(Outcome::Failure(code)),
        );
        self
    }

    /// Scripts an unexpected error for the target.
    #[must_use]
    pub fn with_error(self, target: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .write()
            .insert(target.into(), ScriptedResponse::Error(message.into()));
        self
    }

    /// Returns the targets invoked, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Returns how many times the target was invoked.
    #[must_use]
    pub fn call_count(&self, target: &str) -> usize {
        self.calls.lock().iter().filter(|t| *t == target).count()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

#[async_trait]
impl SuiteExecutor for ScriptedExecutor {
    async fn execute(&self, target: &str, _verbose: bool) -> Result<Outcome, HarnessError> {
        self.calls.lock().push(target.to_string());

        let response = self.responses.read().get(target).cloned();
        match response {
            None | Some(ScriptedResponse::Outcome(Outcome::Success)) => Ok(Outcome::Success),
            Some(ScriptedResponse::Outcome(outcome)) => Ok(outcome),
            Some(ScriptedResponse::Error(message)) => Err(HarnessError::Setup(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_target_succeeds() {
        let executor = ScriptedExecutor::new();
        let outcome = executor.execute("api", false).await.unwrap();
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(executor.call_count("api"), 1);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let executor = ScriptedExecutor::new().with_failure("ui", 1);
        let outcome = executor.execute("ui", false).await.unwrap();
        assert_eq!(outcome, Outcome::Failure(1));
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let executor = ScriptedExecutor::new().with_error("api", "driver missing");
        let error = executor.execute("api", false).await.unwrap_err();
        assert!(error.to_string().contains("driver missing"));
    }

    #[tokio::test]
    async fn test_call_recording_and_reset() {
        let executor = ScriptedExecutor::new();
        executor.execute("api", false).await.unwrap();
        executor.execute("ui", false).await.unwrap();

        assert_eq!(executor.calls(), vec!["api", "ui"]);

        executor.reset();
        assert!(executor.calls().is_empty());
    }
}
