//! API suite: availability checks against the hosted site.

use tracing::{debug, info};

use crate::errors::HarnessError;

use super::config::SuiteConfig;
use super::http::PageFetcher;

/// Asserts that the homepage responded with HTTP 200.
pub fn assert_ok_status(status_code: u16) -> Result<(), HarnessError> {
    if status_code == 200 {
        Ok(())
    } else {
        Err(HarnessError::assertion(
            "homepage_status",
            format!("expected status 200, got {status_code}"),
        ))
    }
}

/// Runs the API health checks.
///
/// Transport errors propagate as-is; a completed request with a bad
/// status is a structured assertion failure.
pub async fn run_health_checks(
    fetcher: &PageFetcher,
    config: &SuiteConfig,
    verbose: bool,
) -> Result<(), HarnessError> {
    let result = fetcher.fetch(&config.base_url).await?;
    assert_ok_status(result.status_code)?;

    if verbose {
        info!(
            url = %config.base_url,
            status = result.status_code,
            duration_ms = result.duration_ms,
            "Server reachable"
        );
    } else {
        debug!(url = %config.base_url, status = result.status_code, "Server reachable");
    }

    Ok(())
}
