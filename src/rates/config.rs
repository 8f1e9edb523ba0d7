use std::time::Duration;

use super::error::RateError;

/// Daily rate sheet published by the Czech National Bank.
pub const CNB_DAILY_URL: &str = "https://www.cnb.cz/cs/financni-trhy/devizovy-trh/kurzy-devizoveho-trhu/kurzy-devizoveho-trhu/denni_kurz.txt";

/// Configuration for [`CnbClient`](super::CnbClient).
#[derive(Debug, Clone)]
pub struct CnbConfig {
    /// Rate sheet endpoint. `?date=DD.MM.YYYY` is appended for past dates.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for CnbConfig {
    fn default() -> Self {
        Self {
            base_url: CNB_DAILY_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CnbConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// - `FAKTORIO_CNB_URL`: rate sheet endpoint (default: the CNB daily sheet)
    /// - `FAKTORIO_CNB_TIMEOUT_MS`: request timeout in milliseconds (default: 30000)
    pub fn from_env() -> Result<Self, RateError> {
        let base_url =
            std::env::var("FAKTORIO_CNB_URL").unwrap_or_else(|_| CNB_DAILY_URL.to_string());

        let timeout_ms: u64 = std::env::var("FAKTORIO_CNB_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse()
            .map_err(|e| RateError::Config(format!("invalid FAKTORIO_CNB_TIMEOUT_MS: {e}")))?;

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Set the rate sheet endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
