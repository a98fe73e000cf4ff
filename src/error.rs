use thiserror::Error;

/// Main error type for the playtime engine.
///
/// These never cross the public `lookup` boundary: every failure is folded
/// into a diagnostic string on the returned [`crate::PlaytimeResult`].
#[derive(Error, Debug)]
pub enum PlaytimeError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Source errors
    #[error("Source '{source_name}' error: {message}")]
    Source { source_name: String, message: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for PlaytimeError {
    fn from(s: String) -> Self {
        PlaytimeError::Other(s)
    }
}

impl From<&str> for PlaytimeError {
    fn from(s: &str) -> Self {
        PlaytimeError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlaytimeError>;
