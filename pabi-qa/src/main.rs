//! QA harness entry point.
//!
//! Runs the fixed two-stage plan (API health checks, then UI checks)
//! against the hosted site and maps the aggregate result onto the
//! process exit code: 0 when all stages pass, 1 otherwise. The exit-code
//! decision lives only here; the runner itself just computes a result.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use pabi_qa::events::LoggingEventSink;
use pabi_qa::observability::init_tracing;
use pabi_qa::runner::{StageRunner, StageSpec};
use pabi_qa::suites::{HostedSuiteExecutor, SuiteConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(passed) => {
            if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Harness setup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<bool> {
    let config = SuiteConfig::default();
    info!(base_url = %config.base_url, "Pa-Bi auction QA automation started");

    let executor =
        HostedSuiteExecutor::new(config).context("failed to provision suite executor")?;
    let runner = StageRunner::with_sink(Arc::new(LoggingEventSink::info()));

    let result = runner.run(&executor, &StageSpec::default_plan()).await;
    info!(%result, "QA run finished");

    Ok(result.is_success())
}
