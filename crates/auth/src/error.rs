use thiserror::Error;

/// Errors that can occur while preparing authenticated requests.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request fields did not serialize to a JSON object.
    #[error("invalid request fields: {0}")]
    InvalidFields(String),

    /// The system clock reports a time before the Unix epoch.
    #[error("system clock is before the Unix epoch")]
    ClockBeforeEpoch,
}
