//! HTTP fetching for the hosted suites.

use std::time::Instant;

use crate::errors::HarnessError;

use super::config::SuiteConfig;

/// Result of a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status code.
    pub status_code: u16,
    /// Response body as text.
    pub text: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// Time taken to fetch in milliseconds.
    pub duration_ms: f64,
}

impl FetchResult {
    /// Whether the fetch was successful (2xx status).
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Thin reqwest wrapper used by the concrete suites.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Creates a fetcher from the suite configuration.
    pub fn new(config: &SuiteConfig) -> Result<Self, HarnessError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HarnessError::Setup(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetches a URL and returns status, body and final URL.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, HarnessError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let text = response.text().await?;

        Ok(FetchResult {
            status_code,
            text,
            final_url,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
