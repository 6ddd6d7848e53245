//! Razorpay MCP Core: configuration, logging, and lifecycle types.
//!
//! This crate has no internal dependencies. Everything the server needs
//! before it can build a Razorpay client lives here.
//!
//! # Modules
//!
//! - [`config`]: flag / environment / file resolution into [`EffectiveConfig`]
//! - [`logging`]: `tracing` subscriber setup and its [`LogGuard`]
//! - [`lifecycle`]: [`ServerState`] and the [`LifecycleHandle`] watch channel
//! - [`error`]: Error types and Result alias

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{ConfigOverrides, EffectiveConfig, TransportMode};
pub use error::{Error, Result};
pub use lifecycle::{LifecycleHandle, ServerState};
pub use logging::{init_logging, LogGuard};
