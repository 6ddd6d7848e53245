//! Razorpay MCP Server entrypoint.
//!
//! The binary in `main.rs` is a thin shell over this library:
//!
//! 1. [`cli::Cli`] parses flags and picks the transport (HTTP by default).
//! 2. `razorpay_mcp_core` resolves the effective configuration and installs
//!    logging.
//! 3. [`app`] builds the Razorpay client, the MCP server and the transport.
//! 4. [`run::run_until`] serves until SIGINT/SIGTERM or a transport error,
//!    then shuts down within [`run::SHUTDOWN_TIMEOUT`].

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod error;
pub mod run;

pub use error::{Error, Result};
