//! Razorpay tools served over the Model Context Protocol.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      razorpay-mcp                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolSpec: one Razorpay endpoint as an MCP tool             │
//! │  Toolset / ToolsetGroup: named groups, enable + read-only   │
//! │  ToolRegistry trait: tool listing and dispatch              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RazorpayMcpServer: implements rmcp::ServerHandler          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Transport trait                                            │
//! │  ├── StdioTransport: stdin/stdout                           │
//! │  └── HttpTransport: streamable HTTP on axum                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use razorpay_mcp::{HttpServerOptions, HttpTransport, RazorpayMcpServer, Transport};
//! use razorpay_mcp_client::RazorpayClient;
//!
//! let client = RazorpayClient::new(key, secret)?;
//! let server = RazorpayMcpServer::new(client, "1.0.0", &[], false)?;
//! let transport = HttpTransport::new(server, HttpServerOptions::default())?;
//! transport.start().await?;
//! ```

pub mod error;
pub mod registry;
pub mod server;
pub mod tools;
pub mod toolsets;
pub mod transport;

// Re-exports: error
pub use error::{Error, Result};

// Re-exports: registry and toolsets
pub use registry::{ToolRegistry, ToolResult};
pub use tools::{HttpMethod, Param, ParamKind, PreparedRequest, ToolSpec};
pub use toolsets::{Toolset, ToolsetGroup, default_toolsets};

// Re-exports: server
pub use server::{NAME, RazorpayMcpServer};

// Re-exports: transports
pub use transport::{
    HttpServerOptions, HttpTransport, StdioTransport, Transport, listen_address,
    validate_endpoint_path,
};
