//! HTTP fetching with an explicit fail-soft boundary.
//!
//! Every failure mode (timeout, refused connection, DNS error, non-200
//! status) comes back as a tagged [`FetchError`], never a panic or an
//! opaque fault. Callers fold the tag into degraded audit fields and keep
//! going.

use crate::fetch::page::FetchedPage;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Request identity sent with every outbound GET.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Why a fetch produced no page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the per-request timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection, DNS, TLS, or body-read failure.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// The server answered with a non-200 status.
    #[error("unexpected status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err)
        }
    }
}

/// The fetch seam of the pipeline.
///
/// Production code uses [`HttpFetcher`]; tests substitute canned pages.
/// Each call performs exactly one outbound request: no retries, no caching.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a URL and return its page on a 200 response.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;

    /// GET a URL and return the raw response body regardless of status.
    ///
    /// Tracker scanning reads whatever the server sent back; only a
    /// transport-level failure is an error here.
    async fn fetch_raw(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Fetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given request identity and timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Build a fetcher with the default identity and timeout.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(
            DEFAULT_USER_AGENT,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(FetchedPage::new(url, body))
    }

    async fn fetch_raw(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }
}
