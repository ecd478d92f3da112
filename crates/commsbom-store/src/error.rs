use thiserror::Error;

/// Errors returned by the configuration store and its blob backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The blob would exceed the backend's size quota.
    #[error("storage quota exceeded: {size} bytes > {quota} bytes")]
    QuotaExceeded { size: usize, quota: usize },

    /// Stored data could not be parsed; never silently discarded.
    #[error("corrupt stored data for {context}: {source}")]
    Corrupt {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported saved-configuration schema version {0}")]
    UnsupportedSchema(u64),

    #[error("failed to serialize saved configurations: {0}")]
    Serialize(#[source] serde_json::Error),
}
