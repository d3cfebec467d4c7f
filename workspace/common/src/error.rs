use thiserror::Error;

/// Failure of a call to the remote weather service.
///
/// The UI does not distinguish between these: any of them turns a weather
/// lookup into a "not available" marker and a forecast into an empty list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("failed to parse response: {0}")]
    Malformed(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("no API key configured")]
    MissingApiKey,
}

/// Failure reading or writing the local key-value store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),

    #[error("malformed value under key '{key}': {reason}")]
    Malformed { key: String, reason: String },

    #[error("failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },
}
