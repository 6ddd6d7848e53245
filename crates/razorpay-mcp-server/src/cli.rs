//! Command-line interface.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Parser, Subcommand};
use razorpay_mcp_core::{ConfigOverrides, TransportMode};

/// Package version, reported to MCP clients and in the user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version, commit and build date as shown by `--version`.
///
/// Commit and date come from `RAZORPAY_MCP_COMMIT` / `RAZORPAY_MCP_BUILD_DATE`
/// at compile time, when the release build sets them.
pub static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{VERSION}\ncommit: {}\nbuild date: {}",
        option_env!("RAZORPAY_MCP_COMMIT").unwrap_or("none"),
        option_env!("RAZORPAY_MCP_BUILD_DATE").unwrap_or("unknown"),
    )
});

/// Razorpay MCP Server
///
/// Exposes Razorpay APIs as Model Context Protocol tools over stdio or
/// streamable HTTP.
#[derive(Parser, Debug)]
#[command(name = "server", version, long_version = LONG_VERSION.as_str(), about)]
pub struct Cli {
    /// Razorpay API key
    #[arg(short = 'k', long, global = true)]
    pub key: Option<String>,

    /// Razorpay API secret
    #[arg(short = 's', long, global = true)]
    pub secret: Option<String>,

    /// Path to the log file (defaults to stderr)
    #[arg(short = 'l', long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Comma-separated list of toolsets to enable (default: all)
    #[arg(short = 't', long, global = true, value_delimiter = ',')]
    pub toolsets: Option<Vec<String>>,

    /// Only expose tools that do not modify Razorpay resources
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_switch,
        value_name = "BOOL"
    )]
    pub read_only: Option<bool>,

    /// Address the HTTP server listens on [default: :8080]
    #[arg(short = 'a', long, global = true)]
    pub address: Option<String>,

    /// Path of the MCP endpoint on the HTTP server [default: /mcp]
    #[arg(long, global = true)]
    pub endpoint_path: Option<String>,

    /// Disable MCP session tracking on the HTTP server
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_switch,
        value_name = "BOOL"
    )]
    pub stateless: Option<bool>,

    /// Config file (default: ~/.razorpay-mcp-server.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve MCP over streamable HTTP (default)
    Http,
    /// Serve MCP over stdin/stdout
    Stdio,
}

/// Value of `--flag=<v>` switches: the spellings `1`/`t`/`true`/`0`/`f`/`false`
/// in lower, upper or title case.
fn parse_switch(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(format!("invalid boolean {other:?}")),
    }
}

impl Cli {
    /// Transport selected by the subcommand; HTTP when none is given.
    pub fn mode(&self) -> TransportMode {
        match self.command {
            Some(Command::Stdio) => TransportMode::Stdio,
            Some(Command::Http) | None => TransportMode::Http,
        }
    }

    /// Flags that were given explicitly, for the configuration resolver.
    ///
    /// Switches override lower layers only when present; `--read-only=false`
    /// overrides a `READ_ONLY=true` environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            key: self.key.clone(),
            secret: self.secret.clone(),
            log_file: self.log_file.clone(),
            toolsets: self.toolsets.clone(),
            read_only: self.read_only,
            address: self.address.clone(),
            endpoint_path: self.endpoint_path.clone(),
            stateless: self.stateless,
            config_file: self.config.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
