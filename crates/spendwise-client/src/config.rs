use std::time::Duration;

use spendwise_core::DEFAULT_API_URL;

use crate::error::ClientError;

pub const API_URL_ENV: &str = "SPENDWISE_API_URL";
pub const TIMEOUT_ENV: &str = "SPENDWISE_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    /// Reads `SPENDWISE_API_URL` and `SPENDWISE_TIMEOUT_SECS`, falling back to
    /// the local development backend without a timeout.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self::new(base_url).with_timeout(timeout)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn build_http_client(&self) -> Result<reqwest::Client, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn default_user_agent() -> String {
    format!("spendwise/{}", env!("CARGO_PKG_VERSION"))
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}
