//! The fail-fast stage runner.
//!
//! Drives a fixed, ordered sequence of named test stages to completion or
//! to first failure. The runner is a linear scan with early termination:
//! no retries, no parallelism, no timeouts of its own. Later stages (UI
//! checks) assume the system under test is reachable at all, which the
//! earlier health stage establishes.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::core::{Outcome, RunResult, StageReport};
use crate::events::{EventSink, NoOpEventSink};
use crate::suites::{SuiteExecutor, API_SUITE, UI_SUITE};


/// Failure code used when an executor errors instead of reporting a
/// structured outcome.
pub const UNEXPECTED_FAILURE_CODE: i32 = 2;

/// One named, ordered unit of test execution.
///
/// Specs are defined once, in a fixed sequence, before a run begins and
/// are immutable for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct StageSpec {
    /// Human-readable stage name.
    pub name: String,
    /// Suite locator handed to the executor.
    pub target: String,
    /// Display flag passed through to the executor opaquely.
    pub verbose: bool,
}

impl StageSpec {
    /// Creates a new stage spec.
    #[must_use]
    pub fn new(name: impl Into<String>, target: impl Into<String>, verbose: bool) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            verbose,
        }
    }

    /// The default two-stage plan: API health checks, then UI checks.
    #[must_use]
    pub fn default_plan() -> Vec<Self> {
        vec![
            Self::new("API tests", API_SUITE, true),
            Self::new("UI tests", UI_SUITE, true),
        ]
    }
}

/// Executes an ordered list of named test-suite stages, halting the run
/// on the first failure.
pub struct StageRunner {
    sink: Arc<dyn EventSink>,
}

impl Default for StageRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl StageRunner {
    /// Creates a runner with no event sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Arc::new(NoOpEventSink),
        }
    }

    /// Creates a runner that emits events to the given sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    /// Runs the stages strictly in declaration order.
    ///
    /// Each stage's suite is invoked exactly once; no stage after the
    /// first failure is ever invoked. Executor errors are normalized into
    /// a [`Outcome::Failure`] with [`UNEXPECTED_FAILURE_CODE`] — this
    /// method never propagates an error itself. Translating the result
    /// into a process exit status is the caller's responsibility.
    pub async fn run(&self, executor: &dyn SuiteExecutor, stages: &[StageSpec]) -> RunResult {
        let run_id = Uuid::new_v4();
        info!(%run_id, stages = stages.len(), "QA run started");
        self.sink
            .emit(
                "run.started",
                Some(json!({ "run_id": run_id, "stages": stages.len() })),
            )
            .await;

        for spec in stages {
            let started_at = Utc::now();
            info!(stage = %spec.name, target = %spec.target, "Stage starting");
            self.sink
                .emit(
                    "stage.started",
                    Some(json!({ "name": spec.name, "target": spec.target })),
                )
                .await;

            let (outcome, error_detail) = match executor.execute(&spec.target, spec.verbose).await
            {
                Ok(outcome) => (outcome, None),
                Err(e) => (
                    Outcome::Failure(UNEXPECTED_FAILURE_CODE),
                    Some(e.to_string()),
                ),
            };

            match outcome {
                Outcome::Success => {
                    let report = StageReport::passed(&spec.name, &spec.target, started_at);
                    info!(
                        stage = %spec.name,
                        duration_ms = report.duration_ms(),
                        "Stage passed"
                    );
                    self.sink
                        .emit("stage.passed", serde_json::to_value(&report).ok())
                        .await;
                }
                Outcome::Failure(code) => {
                    let report = StageReport::failed(
                        &spec.name,
                        &spec.target,
                        started_at,
                        code,
                        error_detail.clone(),
                    );
                    match &error_detail {
                        Some(detail) => error!(
                            stage = %spec.name,
                            code,
                            detail = %detail,
                            "Stage failed unexpectedly, stopping run"
                        ),
                        None => error!(stage = %spec.name, code, "Stage failed, stopping run"),
                    }
                    self.sink
                        .emit("stage.failed", serde_json::to_value(&report).ok())
                        .await;
                    return RunResult::stopped_at(&spec.name, code);
                }
            }
        }

        info!("All stages passed");
        self.sink
            .emit("run.completed", Some(json!({ "result": "all_passed" })))
            .await;
        RunResult::AllPassed
    }
}
