//! Listing and dispatch seam between the MCP handler and the tool tables.
//!
//! [`RazorpayMcpServer`](crate::RazorpayMcpServer) only sees a
//! [`ToolRegistry`]. Each [`Toolset`](crate::toolsets::Toolset) answers for
//! its own [`ToolSpec`](crate::tools::ToolSpec) table under its read-only
//! setting, and [`ToolsetGroup`](crate::toolsets::ToolsetGroup) answers for
//! whichever toolsets are enabled.

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Pending outcome of a dispatched tool call.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// Something that can describe tools and route calls to them.
///
/// `call` returns `None` for names the registry does not expose, which the
/// server turns into an `invalid_params` error. Tools hidden by read-only
/// mode count as not exposed.
///
/// # Example
///
/// ```rust,ignore
/// let mut refunds = Toolset::new(
///     "refunds",
///     "Razorpay Refunds related tools",
///     tools::refunds::TOOLS,
///     Arc::clone(&client),
/// );
/// refunds.set_read_only(true);
///
/// assert!(refunds.has_tool("fetch_refund"));
/// assert!(refunds.call("create_refund", json!({ "payment_id": "pay_1" })).is_none());
///
/// let result = refunds
///     .call("fetch_refund", json!({ "refund_id": "rfnd_1" }))
///     .unwrap()
///     .await?;
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Tool definitions as advertised in `tools/list`.
    fn tools(&self) -> Vec<Tool>;

    /// Start the call for `name`, or `None` if it is not exposed here.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

// ============================================================================
// Tests
// ============================================================================
