use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network or TLS failure talking to the form relay.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-2xx status.
    #[error("form relay rejected submission with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Another submission from this client is still in flight.
    #[error("a notification is already being sent")]
    AlreadySending,

    #[error("invalid form endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
