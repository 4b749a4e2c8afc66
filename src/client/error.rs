//! Error types for the LaunchDarkly request helper

use thiserror::Error;

/// Result alias for request helper operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by a single API request. None of them are retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or no response arrived (DNS, TCP, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status outside 200-299
    #[error("LaunchDarkly API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// A success response carried a body that is not valid JSON
    #[error("Failed to parse response body as JSON: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The base URL and path do not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Credentials are unusable before any request is attempted
    #[error("Invalid credentials: {0}")]
    Credentials(String),
}

impl ApiError {
    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body carried by an API or parse error
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Api { body, .. } | ApiError::Serialization { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "TRANSPORT_ERROR",
            ApiError::Api { .. } => "API_ERROR",
            ApiError::Serialization { .. } => "SERIALIZATION_ERROR",
            ApiError::InvalidUrl(_) => "INVALID_URL",
            ApiError::Credentials(_) => "INVALID_CREDENTIALS",
        }
    }
}
