use thiserror::Error;

/// Errors returned while fetching the remote pricing feed.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Network or TLS failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-2xx status. `retry_after` carries the
    /// server's `Retry-After` hint when given in seconds.
    #[error("pricing feed returned {status}")]
    Status {
        status: reqwest::StatusCode,
        retry_after: Option<std::time::Duration>,
    },

    /// The feed body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid pricing URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
