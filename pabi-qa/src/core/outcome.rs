//! Stage outcome and aggregate run result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The structured pass/fail result of one stage.
///
/// A failing stage carries an opaque non-zero code; per-check detail
/// belongs to the suite executor, not to this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "code")]
pub enum Outcome {
    /// The stage passed.
    Success,
    /// The stage failed with a non-zero code.
    Failure(i32),
}

impl Outcome {
    /// Returns true if the outcome is a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if the outcome is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the failure code, or `None` on success.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Success => None,
            Self::Failure(code) => Some(*code),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure(code) => write!(f, "failure({code})"),
        }
    }
}

/// The aggregate result of executing all stages in order.
///
/// Exactly one variant is produced per run: either every stage passed, or
/// the run stopped at the first failing stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum RunResult {
    /// Every stage passed.
    AllPassed,
    /// The run halted at the named stage.
    StoppedAt {
        /// Name of the stage that failed.
        stage: String,
        /// Failure code reported for that stage.
        code: i32,
    },
}

impl RunResult {
    /// Creates a stopped-at result.
    #[must_use]
    pub fn stopped_at(stage: impl Into<String>, code: i32) -> Self {
        Self::StoppedAt {
            stage: stage.into(),
            code,
        }
    }

    /// Returns true if all stages passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::AllPassed)
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllPassed => write!(f, "all stages passed"),
            Self::StoppedAt { stage, code } => {
                write!(f, "stopped at stage '{stage}' (code {code})")
            }
        }
    }
}
