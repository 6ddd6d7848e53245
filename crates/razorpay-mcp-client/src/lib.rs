//! # razorpay-mcp-client
//!
//! Thin async client for the Razorpay REST API.
//!
//! The MCP tools describe *which* endpoint to call; this crate only knows
//! how to call one: HTTP basic auth with the key id and secret, JSON in and
//! JSON out, and Razorpay's error envelope decoded into [`Error::Api`].
//!
//! ```rust,ignore
//! use razorpay_mcp_client::{Method, RazorpayClient};
//!
//! let client = RazorpayClient::new("rzp_test_key", "secret")?
//!     .with_user_agent("razorpay-mcp/0.5.0/http");
//! let payment = client
//!     .request(Method::GET, "/payments/pay_123", &[], None)
//!     .await?;
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;

pub use client::{RazorpayClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use reqwest::Method;
