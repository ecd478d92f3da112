use thiserror::Error;

/// Errors raised while reading application configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Blocking errors raised when a location entry is turned into a [`crate::Location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location name must be non-empty")]
    MissingName,

    #[error(
        "only {allocated} of {devices} devices have a headset; allocate the rest or mark them customer supplied"
    )]
    IncompleteHeadsets { allocated: u32, devices: u32 },

    #[error("device or headset counts are too large")]
    CountOverflow,
}

/// Errors raised by [`crate::Session`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("project field '{0}' is required")]
    MissingProjectField(&'static str),

    #[error("no location with id {0}")]
    UnknownLocation(uuid::Uuid),

    #[error(transparent)]
    Location(#[from] LocationError),
}
