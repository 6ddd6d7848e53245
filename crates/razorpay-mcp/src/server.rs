//! The Razorpay MCP server handler.
//!
//! [`RazorpayMcpServer`] owns the Razorpay client and the enabled toolsets
//! and implements [`ServerHandler`], so it can be handed to either
//! transport directly.

use std::sync::Arc;

use razorpay_mcp_client::RazorpayClient;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;

use crate::error::Result;
use crate::registry::ToolRegistry;
use crate::toolsets::{ToolsetGroup, default_toolsets};

/// Server name advertised during MCP initialization.
pub const NAME: &str = "razorpay-mcp-server";

const INSTRUCTIONS: &str = "Tools for the Razorpay payments API: payments, payment links, \
orders, refunds, QR codes, settlements and payouts. Amounts are in the smallest currency \
sub-unit (paise for INR).";

/// MCP handler exposing the enabled Razorpay toolsets.
///
/// Cloning is cheap and shares the same client and toolsets.
#[derive(Clone, Debug)]
pub struct RazorpayMcpServer {
    inner: Arc<ServerInner>,
}

#[derive(Debug)]
struct ServerInner {
    client: Arc<RazorpayClient>,
    toolsets: ToolsetGroup,
    version: String,
}

impl RazorpayMcpServer {
    /// Build the server with the named toolsets enabled (all when empty).
    ///
    /// Returns [`Error::UnknownToolset`](crate::Error::UnknownToolset) for
    /// names that are not registered.
    pub fn new(
        client: RazorpayClient,
        version: impl Into<String>,
        enabled_toolsets: &[String],
        read_only: bool,
    ) -> Result<Self> {
        let client = Arc::new(client);
        let mut toolsets = default_toolsets(Arc::clone(&client), read_only);
        toolsets.enable_toolsets(enabled_toolsets)?;

        let version = version.into();
        tracing::info!(
            %version,
            read_only,
            toolsets = ?toolsets.enabled_names(),
            tools = toolsets.tool_count(),
            "MCP server constructed"
        );

        Ok(Self {
            inner: Arc::new(ServerInner {
                client,
                toolsets,
                version,
            }),
        })
    }

    pub fn version(&self) -> &str {
        &self.inner.version
    }

    pub fn client(&self) -> &RazorpayClient {
        &self.inner.client
    }

    pub fn toolsets(&self) -> &ToolsetGroup {
        &self.inner.toolsets
    }

    /// Tools exposed to clients.
    pub fn tools(&self) -> Vec<Tool> {
        self.inner.toolsets.tools()
    }

    pub fn tool_count(&self) -> usize {
        self.inner.toolsets.tool_count()
    }

    /// Dispatch a tool call by name, outside of any MCP session.
    pub async fn call(&self, name: &str, args: Value) -> std::result::Result<CallToolResult, ErrorData> {
        match self.inner.toolsets.call(name, args) {
            Some(future) => future.await,
            None => Err(ErrorData::invalid_params(format!("unknown tool: {name}"), None)),
        }
    }
}

impl ServerHandler for RazorpayMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = NAME.into();
        info.server_info.version = self.version().into();
        info.instructions = Some(INSTRUCTIONS.into());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        tracing::debug!(tool = %request.name, "tool call");
        self.call(&request.name, args).await
    }
}

// ============================================================================
// Tests
// ============================================================================
