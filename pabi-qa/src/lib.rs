//! # pabi-qa
//!
//! End-to-end QA automation harness for the Pa-Bi auction site.
//!
//! The harness drives an ordered list of named test-suite stages — an
//! API/health suite and a UI suite — and halts the run on the first
//! failure (fail-fast):
//!
//! - **Stage-based execution**: a fixed, strictly sequential stage plan
//! - **Suite executor boundary**: suites are pluggable collaborators that
//!   report a pass/fail [`core::Outcome`]
//! - **Event-driven observability**: run and stage notices via tracing
//!   and event sinks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pabi_qa::prelude::*;
//!
//! let executor = HostedSuiteExecutor::new(SuiteConfig::default())?;
//! let runner = StageRunner::new();
//! let result = runner.run(&executor, &StageSpec::default_plan()).await;
//! assert!(result.is_success());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod errors;
pub mod events;
pub mod observability;
pub mod runner;
pub mod suites;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Outcome, RunResult, StageReport};
    pub use crate::errors::HarnessError;
    pub use crate::events::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::runner::{StageRunner, StageSpec, UNEXPECTED_FAILURE_CODE};
    pub use crate::suites::{
        HostedSuiteExecutor, SuiteConfig, SuiteExecutor, API_SUITE, UI_SUITE,
    };
}
