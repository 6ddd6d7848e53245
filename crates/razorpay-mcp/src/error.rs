//! Error types for razorpay-mcp

use thiserror::Error;

/// Result type alias for razorpay-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or running the MCP server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A requested toolset name is not registered
    #[error("toolset {0} does not exist")]
    UnknownToolset(String),

    /// Error from razorpay-mcp-client
    #[error("Razorpay client error: {0}")]
    Client(#[from] razorpay_mcp_client::Error),

    /// The HTTP endpoint path cannot be mounted as a route
    #[error("invalid endpoint path {path:?}: {reason}")]
    InvalidEndpointPath { path: String, reason: &'static str },

    /// The HTTP listener could not bind its address
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP serve loop failed after binding
    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The stdio session failed to initialize or terminated abnormally
    #[error("stdio transport error: {0}")]
    Stdio(String),
}
