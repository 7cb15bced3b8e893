//! Error types for the QA harness.
//!
//! The taxonomy separates structured assertion failures (a suite ran its
//! checks and something did not hold) from unexpected failures (transport
//! errors, malformed selectors, setup problems). The stage runner treats
//! the two differently only in how it reports them; both halt the run.

use thiserror::Error;

/// The main error type for harness operations.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An HTTP request failed before producing a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A CSS selector used by a suite could not be parsed.
    #[error("Invalid selector '{selector}': {detail}")]
    Selector {
        /// The offending selector.
        selector: String,
        /// Parser detail.
        detail: String,
    },

    /// A suite check completed but its assertion did not hold.
    #[error("Assertion failed in {check}: {detail}")]
    Assertion {
        /// Name of the failing check.
        check: String,
        /// What was expected versus observed.
        detail: String,
    },

    /// A stage referenced a suite target the executor does not know.
    #[error("Unknown suite target: {0}")]
    UnknownSuite(String),

    /// The executor could not be provisioned.
    #[error("Setup error: {0}")]
    Setup(String),
}

impl HarnessError {
    /// Creates an assertion error.
    #[must_use]
    pub fn assertion(check: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Assertion {
            check: check.into(),
            detail: detail.into(),
        }
    }

    /// Creates a selector error.
    #[must_use]
    pub fn selector(selector: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            detail: detail.into(),
        }
    }

    /// Returns true if this is a structured assertion failure rather than
    /// an unexpected failure.
    #[must_use]
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_error_display() {
        let error = HarnessError::assertion("title_check", "expected 'Pa-Bi' in title");
        assert!(error.to_string().contains("title_check"));
        assert!(error.to_string().contains("Pa-Bi"));
        assert!(error.is_assertion());
    }

    #[test]
    fn test_selector_error_display() {
        let error = HarnessError::selector("a[", "unexpected end of input");
        assert!(error.to_string().contains("a["));
        assert!(!error.is_assertion());
    }

    #[test]
    fn test_unknown_suite_display() {
        let error = HarnessError::UnknownSuite("perf".to_string());
        assert_eq!(error.to_string(), "Unknown suite target: perf");
    }
}
