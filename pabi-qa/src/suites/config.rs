//! Configuration for the hosted suite executor.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the suites that exercise the hosted site.
///
/// Defaults point at the deployed Pa-Bi auction app; the harness itself
/// has no configuration surface, so these are only overridden in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the system under test.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Token the landing page title must contain.
    #[serde(default = "default_title_token")]
    pub title_token: String,
    /// Text marker identifying a product listing (current price label).
    #[serde(default = "default_price_marker")]
    pub price_marker: String,
    /// Text marker expected on a product detail page (bid label).
    #[serde(default = "default_bid_marker")]
    pub bid_marker: String,
}

fn default_base_url() -> String {
    "https://syeob.lovable.app/".to_string()
}

fn default_timeout() -> f64 {
    10.0
}

fn default_user_agent() -> String {
    "pabi-qa/0.1".to_string()
}

fn default_title_token() -> String {
    "Pa-Bi".to_string()
}

fn default_price_marker() -> String {
    "현재가".to_string()
}

fn default_bid_marker() -> String {
    "입찰".to_string()
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            title_token: default_title_token(),
            price_marker: default_price_marker(),
            bid_marker: default_bid_marker(),
        }
    }
}

impl SuiteConfig {
    /// Creates a new suite configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the title token.
    #[must_use]
    pub fn with_title_token(mut self, token: impl Into<String>) -> Self {
        self.title_token = token.into();
        self
    }

    /// Gets timeout as Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SuiteConfig::default();
        assert_eq!(config.base_url, "https://syeob.lovable.app/");
        assert_eq!(config.timeout_seconds, 10.0);
        assert_eq!(config.title_token, "Pa-Bi");
        assert_eq!(config.price_marker, "현재가");
        assert_eq!(config.bid_marker, "입찰");
    }

    #[test]
    fn test_config_builder() {
        let config = SuiteConfig::new()
            .with_base_url("http://localhost:8080/")
            .with_timeout(2.0)
            .with_title_token("Local");

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.title_token, "Local");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SuiteConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost/"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost/");
        assert_eq!(config.title_token, "Pa-Bi");
    }
}
