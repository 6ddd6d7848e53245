//! Error types for razorpay-mcp-client

use thiserror::Error;

/// Result type alias for razorpay-mcp-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Razorpay API
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Razorpay answered with a non-success status
    #[error("Razorpay API error ({status}): {code}: {description}")]
    Api {
        status: u16,
        code: String,
        description: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The response body was not the JSON we expected
    #[error("failed to decode Razorpay response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) | Self::Decode(_) => None,
        }
    }
}
