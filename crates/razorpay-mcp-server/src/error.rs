//! Error types for the server entrypoint

use std::time::Duration;

use thiserror::Error;

/// Result type alias for entrypoint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end the process with a non-zero exit code
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration or logger setup failed
    #[error(transparent)]
    Core(#[from] razorpay_mcp_core::Error),

    /// Razorpay client construction failed
    #[error(transparent)]
    Client(#[from] razorpay_mcp_client::Error),

    /// Server construction or transport failure
    #[error(transparent)]
    Server(#[from] razorpay_mcp::Error),

    /// The transport task ended without reporting a result
    #[error("transport task failed: {0}")]
    Task(String),

    /// Graceful shutdown did not finish in time
    #[error("shutdown did not complete within {0:?}")]
    ShutdownTimeout(Duration),
}
