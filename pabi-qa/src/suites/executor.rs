//! Suite executor boundary and the hosted-site implementation.

use async_trait::async_trait;
use tracing::warn;

use crate::core::Outcome;
use crate::errors::HarnessError;

use super::config::SuiteConfig;
use super::http::PageFetcher;
use super::{api, ui};

/// Target locator for the API/health suite.
pub const API_SUITE: &str = "api";

/// Target locator for the UI suite.
pub const UI_SUITE: &str = "ui";

/// Failure code reported when a suite's checks do not hold.
///
/// Matches the exit-code convention of the original pytest-based runner.
pub const SUITE_FAILURE_CODE: i32 = 1;

/// The external collaborator that performs a stage's checks.
///
/// Executors report pass/fail through [`Outcome`] and signal unexpected
/// failures (network errors, setup problems) through `Err` — they never
/// panic. `verbose` is an opaque display flag passed through by the
/// runner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuiteExecutor: Send + Sync {
    /// Runs the suite identified by `target` and reports its outcome.
    async fn execute(&self, target: &str, verbose: bool) -> Result<Outcome, HarnessError>;
}

/// Suite executor bound to the hosted Pa-Bi auction site.
#[derive(Debug, Clone)]
pub struct HostedSuiteExecutor {
    fetcher: PageFetcher,
    config: SuiteConfig,
}

impl HostedSuiteExecutor {
    /// Creates an executor for the configured site.
    pub fn new(config: SuiteConfig) -> Result<Self, HarnessError> {
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }

    /// Returns the suite configuration.
    #[must_use]
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    fn normalize(check_result: Result<(), HarnessError>) -> Result<Outcome, HarnessError> {
        match check_result {
            Ok(()) => Ok(Outcome::Success),
            // Assertion failures are structured outcomes; everything else
            // is an unexpected failure the runner normalizes itself.
            Err(e) if e.is_assertion() => {
                warn!(error = %e, "Suite check failed");
                Ok(Outcome::Failure(SUITE_FAILURE_CODE))
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SuiteExecutor for HostedSuiteExecutor {
    async fn execute(&self, target: &str, verbose: bool) -> Result<Outcome, HarnessError> {
        match target {
            API_SUITE => {
                Self::normalize(api::run_health_checks(&self.fetcher, &self.config, verbose).await)
            }
            UI_SUITE => {
                Self::normalize(ui::run_ui_checks(&self.fetcher, &self.config, verbose).await)
            }
            other => Err(HarnessError::UnknownSuite(other.to_string())),
        }
    }
}
