//! Retry policy for the pricing feed.
//!
//! The feed is a small static file and the designer works without it, so the
//! policy gives up early: client errors other than 408/429 are final, and a
//! server asking us to come back later than [`MAX_DELAY`] is treated as down.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;

use crate::error::PricingError;

const MAX_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RetryPolicy {
    pub(crate) max_retries: u32,
    pub(crate) backoff_base_ms: u64,
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based), or `None` when `err` is
    /// final or the retries are spent.
    pub(crate) fn delay_before(&self, retry: u32, err: &PricingError) -> Option<Duration> {
        if retry > self.max_retries {
            return None;
        }
        match err {
            PricingError::Status {
                status,
                retry_after,
            } if is_transient_status(*status) => match retry_after {
                Some(wait) if *wait > MAX_DELAY => None,
                Some(wait) => Some(*wait),
                None => Some(self.backoff(retry)),
            },
            PricingError::Http(e) if e.is_timeout() || e.is_connect() || e.is_body() => {
                Some(self.backoff(retry))
            }
            PricingError::Status { .. }
            | PricingError::Http(_)
            | PricingError::Deserialize { .. }
            | PricingError::InvalidUrl { .. } => None,
        }
    }

    /// `backoff_base_ms * 2^(retry - 1)` with ±25 % jitter, capped at [`MAX_DELAY`].
    fn backoff(&self, retry: u32) -> Duration {
        let exp = retry.saturating_sub(1).min(10);
        let nominal = self.backoff_base_ms.saturating_mul(1u64 << exp);
        let spread = nominal / 4;
        let jittered = rand::random_range(nominal - spread..=nominal.saturating_add(spread));
        Duration::from_millis(jittered).min(MAX_DELAY)
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
}

/// Runs `request` until it succeeds or `policy` says to stop.
pub(crate) async fn fetch_with_retry<T, F, Fut>(
    policy: RetryPolicy,
    mut request: F,
) -> Result<T, PricingError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, PricingError>>,
{
    let mut retry = 1u32;
    loop {
        let err = match request().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        let Some(delay) = policy.delay_before(retry, &err) else {
            return Err(err);
        };
        tracing::warn!(
            retry,
            max_retries = policy.max_retries,
            ?delay,
            error = %err,
            "pricing feed unavailable, retrying"
        );
        tokio::time::sleep(delay).await;
        retry = retry.saturating_add(1);
    }
}
