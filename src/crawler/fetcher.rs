//! HTTP page fetcher
//!
//! One GET per call, no retries. Every failure (transport error, non-success
//! status, unreadable or empty body) is logged and reported as `None`, so a
//! single bad page can never abort a crawl.

use reqwest::Client;
use std::time::Duration;

/// Browser-like user agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Builds the shared HTTP client
///
/// # Arguments
///
/// * `user_agent` - Value of the `User-Agent` header
/// * `timeout` - Upper bound for a whole request
///
/// # Example
///
/// ```no_run
/// use folio_scout::crawler::{build_http_client, DEFAULT_USER_AGENT};
/// use std::time::Duration;
///
/// let client = build_http_client(DEFAULT_USER_AGENT, Duration::from_secs(20)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over a single pooled client
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves `url`, returning the body or `None` on any failure
    pub async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!("Request timeout fetching {}", url);
                } else if e.is_connect() {
                    tracing::warn!("Connection failed fetching {}: {}", url, e);
                } else {
                    tracing::warn!("Network error fetching {}: {}", url, e);
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Non-success response {} for {}", status.as_u16(), url);
            return None;
        }

        match response.text().await {
            Ok(body) if body.trim().is_empty() => {
                tracing::warn!("Empty body for {}", url);
                None
            }
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}
