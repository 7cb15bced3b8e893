//! Per-stage execution record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Outcome;

/// Record of one executed stage, carried in event payloads.
///
/// The runner's public return value stays [`super::RunResult`]; reports
/// exist for observability only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    /// Stage name.
    pub name: String,
    /// Suite target the stage was bound to.
    pub target: String,
    /// Outcome of the stage.
    pub outcome: Outcome,
    /// When the stage started.
    pub started_at: DateTime<Utc>,
    /// When the stage ended.
    pub ended_at: DateTime<Utc>,
    /// Error detail if the stage failed unexpectedly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageReport {
    /// Creates a passed report.
    #[must_use]
    pub fn passed(
        name: impl Into<String>,
        target: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            outcome: Outcome::Success,
            started_at,
            ended_at: Utc::now(),
            error: None,
        }
    }

    /// Creates a failed report.
    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        target: impl Into<String>,
        started_at: DateTime<Utc>,
        code: i32,
        error: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            outcome: Outcome::Failure(code),
            started_at,
            ended_at: Utc::now(),
            error,
        }
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        (self.ended_at - self.started_at).num_milliseconds() as f64
    }

    /// Returns true if the stage passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_report() {
        let started = Utc::now();
        let report = StageReport::passed("API tests", "api", started);

        assert_eq!(report.name, "API tests");
        assert_eq!(report.target, "api");
        assert!(report.is_success());
        assert!(report.error.is_none());
    }

    #[test]
    fn test_failed_report() {
        let started = Utc::now();
        let report = StageReport::failed(
            "UI tests",
            "ui",
            started,
            1,
            Some("title mismatch".to_string()),
        );

        assert!(!report.is_success());
        assert_eq!(report.outcome, Outcome::Failure(1));
        assert_eq!(report.error, Some("title mismatch".to_string()));
    }

    #[test]
    fn test_report_duration() {
        let started = Utc::now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let report = StageReport::passed("test", "api", started);

        assert!(report.duration_ms() >= 10.0);
    }

    #[test]
    fn test_report_serialization() {
        let report = StageReport::passed("test", "api", Utc::now());

        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("error"));

        let deserialized: StageReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.name, deserialized.name);
        assert_eq!(report.outcome, deserialized.outcome);
    }
}
