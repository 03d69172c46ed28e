//! Error types for the HTTP adapter

use derby_application::ApiError;
use thiserror::Error;

/// Result type alias for HTTP adapter operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur when talking to the voting server over HTTP
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl From<HttpError> for ApiError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::InvalidUrl { url, reason } => {
                ApiError::InvalidUrl(format!("{}: {}", url, reason))
            }
            HttpError::ClientBuild(e) => ApiError::Connection(e.to_string()),
            HttpError::Request(e) if e.is_timeout() => ApiError::Timeout,
            HttpError::Request(e) if e.is_decode() => ApiError::Decode(e.to_string()),
            HttpError::Request(e) => ApiError::Connection(e.to_string()),
            HttpError::Status { status, message } => ApiError::Rejected { status, message },
            HttpError::ParseError { error, .. } => ApiError::Decode(error),
        }
    }
}
