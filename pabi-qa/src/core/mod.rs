//! Core result types shared by the runner and the suites.

mod outcome;
mod report;

pub use outcome::{Outcome, RunResult};
pub use report::StageReport;
