//! Named toolsets and the group that filters them.
//!
//! A [`Toolset`] binds a table of [`ToolSpec`]s to the shared Razorpay
//! client. A [`ToolsetGroup`] holds every toolset in registration order and
//! only exposes the ones that were enabled.

use std::sync::Arc;

use razorpay_mcp_client::RazorpayClient;
use rmcp::model::Tool;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{self, ToolSpec};

// ============================================================================
// Toolset
// ============================================================================

/// A named, enableable group of Razorpay tools.
#[derive(Clone, Debug)]
pub struct Toolset {
    name: &'static str,
    description: &'static str,
    enabled: bool,
    read_only: bool,
    specs: &'static [ToolSpec],
    client: Arc<RazorpayClient>,
}

impl Toolset {
    pub fn new(
        name: &'static str,
        description: &'static str,
        specs: &'static [ToolSpec],
        client: Arc<RazorpayClient>,
    ) -> Self {
        Self {
            name,
            description,
            enabled: false,
            read_only: false,
            specs,
            client,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Hide write tools from [`ToolRegistry::tools`] and refuse to dispatch them.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Specs exposed under the current read-only setting.
    pub fn specs(&self) -> impl Iterator<Item = &'static ToolSpec> + '_ {
        let read_only = self.read_only;
        self.specs.iter().filter(move |spec| spec.read_only || !read_only)
    }
}

impl ToolRegistry for Toolset {
    fn tools(&self) -> Vec<Tool> {
        self.specs().map(ToolSpec::tool).collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let spec = self.specs().find(|spec| spec.name == name)?;
        Some(spec.call(Arc::clone(&self.client), args))
    }

    fn has_tool(&self, name: &str) -> bool {
        self.specs().any(|spec| spec.name == name)
    }
}

// ============================================================================
// ToolsetGroup
// ============================================================================

/// All registered toolsets; only enabled ones contribute tools.
#[derive(Debug, Default)]
pub struct ToolsetGroup {
    toolsets: Vec<Toolset>,
    read_only: bool,
}

impl ToolsetGroup {
    pub fn new(read_only: bool) -> Self {
        Self {
            toolsets: Vec::new(),
            read_only,
        }
    }

    /// Register a toolset. The group's read-only mode is applied to it.
    pub fn add(&mut self, mut toolset: Toolset) {
        toolset.set_read_only(self.read_only);
        self.toolsets.push(toolset);
    }

    /// Enable the named toolsets, or all of them when `names` is empty.
    ///
    /// Fails on the first unknown name; nothing is enabled in that case.
    pub fn enable_toolsets(&mut self, names: &[String]) -> Result<()> {
        if let Some(unknown) = names.iter().find(|n| !self.contains(n)) {
            return Err(Error::UnknownToolset(unknown.clone()));
        }

        for toolset in &mut self.toolsets {
            let enabled = names.is_empty() || names.iter().any(|n| n == toolset.name);
            toolset.set_enabled(enabled);
        }

        tracing::debug!(enabled = ?self.enabled_names(), "toolsets enabled");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.toolsets.iter().any(|t| t.name == name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.toolsets.iter().any(|t| t.name == name && t.enabled)
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Names of all registered toolsets, in registration order.
    pub fn toolset_names(&self) -> Vec<&'static str> {
        self.toolsets.iter().map(|t| t.name).collect()
    }

    pub fn enabled_names(&self) -> Vec<&'static str> {
        self.enabled().map(|t| t.name).collect()
    }

    pub fn toolsets(&self) -> &[Toolset] {
        &self.toolsets
    }

    fn enabled(&self) -> impl Iterator<Item = &Toolset> {
        self.toolsets.iter().filter(|t| t.enabled)
    }
}

impl ToolRegistry for ToolsetGroup {
    fn tools(&self) -> Vec<Tool> {
        self.enabled().flat_map(|t| t.tools()).collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let toolset = self.enabled().find(|t| t.has_tool(name))?;
        toolset.call(name, args)
    }

    fn has_tool(&self, name: &str) -> bool {
        self.enabled().any(|t| t.has_tool(name))
    }
}

/// The standard Razorpay toolsets, none enabled yet.
pub fn default_toolsets(client: Arc<RazorpayClient>, read_only: bool) -> ToolsetGroup {
    let mut group = ToolsetGroup::new(read_only);
    let sets: [(&'static str, &'static str, &'static [ToolSpec]); 7] = [
        ("payments", "Razorpay Payments related tools", tools::payments::TOOLS),
        (
            "payment_links",
            "Razorpay Payment Links related tools",
            tools::payment_links::TOOLS,
        ),
        ("orders", "Razorpay Orders related tools", tools::orders::TOOLS),
        ("refunds", "Razorpay Refunds related tools", tools::refunds::TOOLS),
        ("qr_codes", "Razorpay QR codes related tools", tools::qr_codes::TOOLS),
        (
            "settlements",
            "Razorpay Settlements related tools",
            tools::settlements::TOOLS,
        ),
        ("payouts", "Razorpay Payouts related tools", tools::payouts::TOOLS),
    ];
    for (name, description, specs) in sets {
        group.add(Toolset::new(name, description, specs, Arc::clone(&client)));
    }
    group
}

// ============================================================================
// Tests
// ============================================================================
