//! Suite executors for the hosted site.
//!
//! This module provides:
//! - The [`SuiteExecutor`] boundary the stage runner depends on
//! - Configuration for the hosted suites
//! - The API/health and UI suites, expressed over HTTP

pub mod api;
pub mod ui;

mod config;
mod executor;
mod http;

pub use config::SuiteConfig;
pub use executor::{
    HostedSuiteExecutor, SuiteExecutor, API_SUITE, SUITE_FAILURE_CODE, UI_SUITE,
};
pub use http::{FetchResult, PageFetcher};

#[cfg(test)]
pub use executor::MockSuiteExecutor;
