//! HTTP client for the remote `pricing.json` feed.

use std::time::Duration;

use commsbom_core::AppConfig;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response, Url};

use crate::error::PricingError;
use crate::retry::{fetch_with_retry, RetryPolicy};
use crate::types::PricingFeed;

/// Fetches the pricing feed from one fixed URL.
///
/// Use [`PricingClient::from_config`] in the binary, or
/// [`PricingClient::new`] to point at a mock server in tests.
pub struct PricingClient {
    client: Client,
    url: Url,
    retry: RetryPolicy,
}

impl PricingClient {
    /// # Errors
    ///
    /// Returns [`PricingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PricingError::InvalidUrl`] if `url` does
    /// not parse.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PricingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        let parsed = Url::parse(url).map_err(|e| PricingError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            url: parsed,
            retry: RetryPolicy::default(),
        })
    }

    /// Builds the client from application config; `Ok(None)` when the feed
    /// is disabled.
    ///
    /// # Errors
    ///
    /// See [`PricingClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, PricingError> {
        let Some(url) = config.pricing_url.as_deref() else {
            return Ok(None);
        };
        let client = Self::new(url, config.http_timeout_secs, &config.user_agent)?
            .with_retry(config.pricing_max_retries, config.pricing_retry_backoff_ms);
        Ok(Some(client))
    }

    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.retry = RetryPolicy {
            max_retries,
            backoff_base_ms,
        };
        self
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Downloads and parses the feed, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Http`] on network failure after all retries.
    /// - [`PricingError::Status`] on a non-2xx status; client errors other
    ///   than 408 and 429 are not retried.
    /// - [`PricingError::Deserialize`] if the body is not a valid feed.
    pub async fn fetch(&self) -> Result<PricingFeed, PricingError> {
        fetch_with_retry(self.retry, || self.request_feed()).await
    }

    async fn request_feed(&self) -> Result<PricingFeed, PricingError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::Status {
                status,
                retry_after: retry_after(&response),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PricingError::Deserialize {
            context: self.url.to_string(),
            source: e,
        })
    }
}

/// `Retry-After` in delta-seconds form; HTTP dates are ignored.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
        .map(Duration::from_secs)
}
