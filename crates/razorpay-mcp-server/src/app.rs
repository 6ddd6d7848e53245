//! Wiring from resolved configuration to a ready-to-start transport.

use std::sync::Arc;

use razorpay_mcp::{HttpServerOptions, HttpTransport, RazorpayMcpServer, StdioTransport, Transport};
use razorpay_mcp_client::RazorpayClient;
use razorpay_mcp_core::{EffectiveConfig, TransportMode};

use crate::error::Result;

/// `User-Agent` for Razorpay requests: `razorpay-mcp/<version>/<transport>`.
pub fn user_agent(version: &str, mode: TransportMode) -> String {
    format!("razorpay-mcp/{version}/{mode}")
}

/// Build the Razorpay client and MCP server from `config`.
pub fn build_server(
    config: &EffectiveConfig,
    mode: TransportMode,
    version: &str,
) -> Result<RazorpayMcpServer> {
    let client = RazorpayClient::new(config.key(), config.secret())?
        .with_user_agent(user_agent(version, mode));
    let server =
        RazorpayMcpServer::new(client, version, config.toolsets(), config.read_only())?;
    Ok(server)
}

/// The transport for `mode`, serving `server`.
pub fn build_transport(
    server: RazorpayMcpServer,
    config: &EffectiveConfig,
    mode: TransportMode,
) -> Result<Arc<dyn Transport>> {
    let transport: Arc<dyn Transport> = match mode {
        TransportMode::Http => Arc::new(HttpTransport::new(
            server,
            HttpServerOptions {
                address: config.address().to_string(),
                endpoint_path: config.endpoint_path().to_string(),
                stateless: config.stateless(),
            },
        )?),
        TransportMode::Stdio => Arc::new(StdioTransport::new(server)),
    };
    Ok(transport)
}

/// Line printed to stderr once the transport is starting.
pub fn banner(config: &EffectiveConfig, mode: TransportMode) -> String {
    match mode {
        TransportMode::Http => format!(
            "Razorpay MCP Server running on {}{}",
            config.address(),
            config.endpoint_path()
        ),
        TransportMode::Stdio => "Razorpay MCP Server running on stdio".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use razorpay_mcp_core::ConfigOverrides;
    use std::collections::HashMap;

    fn config(overrides: ConfigOverrides, mode: TransportMode) -> EffectiveConfig {
        EffectiveConfig::resolve(&overrides, &HashMap::<String, String>::new(), None, mode)
    }

    #[test]
    fn test_user_agent() {
        assert_eq!(user_agent("1.0.0", TransportMode::Http), "razorpay-mcp/1.0.0/http");
        assert_eq!(user_agent("1.0.0", TransportMode::Stdio), "razorpay-mcp/1.0.0/stdio");
    }

    #[test]
    fn test_build_server_sets_user_agent() {
        let config = config(ConfigOverrides::default(), TransportMode::Stdio);
        let server = build_server(&config, TransportMode::Stdio, "2.0.0").unwrap();
        assert_eq!(server.client().user_agent(), "razorpay-mcp/2.0.0/stdio");
        assert_eq!(server.version(), "2.0.0");
    }

    #[test]
    fn test_build_server_unknown_toolset() {
        let overrides = ConfigOverrides {
            toolsets: Some(vec!["payments".to_string(), "invoices".to_string()]),
            ..ConfigOverrides::default()
        };
        let config = config(overrides, TransportMode::Http);
        let err = build_server(&config, TransportMode::Http, "dev").unwrap_err();
        assert!(matches!(
            err,
            Error::Server(razorpay_mcp::Error::UnknownToolset(ref name)) if name == "invoices"
        ));
    }

    #[test]
    fn test_build_transport_by_mode() {
        let config = config(ConfigOverrides::default(), TransportMode::Http);
        let server = build_server(&config, TransportMode::Http, "dev").unwrap();
        let http = build_transport(server.clone(), &config, TransportMode::Http).unwrap();
        let stdio = build_transport(server, &config, TransportMode::Stdio).unwrap();
        assert_eq!(http.name(), "http");
        assert_eq!(stdio.name(), "stdio");
    }

    #[test]
    fn test_build_transport_rejects_route_pattern() {
        let overrides = ConfigOverrides {
            endpoint_path: Some("/:mcp".to_string()),
            ..ConfigOverrides::default()
        };
        let config = config(overrides, TransportMode::Http);
        let server = build_server(&config, TransportMode::Http, "dev").unwrap();

        let err = build_transport(server, &config, TransportMode::Http).err().expect("expected build_transport to fail");
        assert!(matches!(
            err,
            Error::Server(razorpay_mcp::Error::InvalidEndpointPath { .. })
        ));
    }

    #[test]
    fn test_banner() {
        let overrides = ConfigOverrides {
            address: Some("localhost:9090".to_string()),
            endpoint_path: Some("rzp".to_string()),
            ..ConfigOverrides::default()
        };
        let http = config(overrides, TransportMode::Http);
        assert_eq!(
            banner(&http, TransportMode::Http),
            "Razorpay MCP Server running on localhost:9090/rzp"
        );
        assert_eq!(
            banner(&http, TransportMode::Stdio),
            "Razorpay MCP Server running on stdio"
        );
    }
}
