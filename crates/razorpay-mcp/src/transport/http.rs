//! Streamable HTTP transport.
//!
//! Mounts `rmcp`'s streamable HTTP service at a single endpoint path on an
//! axum router. Stateful mode tracks MCP sessions (`Mcp-Session-Id`);
//! stateless mode answers every request independently.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use super::{Running, RunningSlot, Transport};
use crate::error::{Error, Result};
use crate::server::RazorpayMcpServer;

/// Listener settings for [`HttpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpServerOptions {
    /// `host:port`, or `:port` for all interfaces.
    pub address: String,
    /// Path the MCP endpoint is mounted at. Must start with `/`.
    pub endpoint_path: String,
    /// Disable MCP session tracking.
    pub stateless: bool,
}

impl Default for HttpServerOptions {
    fn default() -> Self {
        Self {
            address: ":8080".to_string(),
            endpoint_path: "/mcp".to_string(),
            stateless: false,
        }
    }
}

/// Turn `:8080` into something `TcpListener::bind` accepts.
pub fn listen_address(address: &str) -> String {
    if address.starts_with(':') {
        format!("0.0.0.0{address}")
    } else {
        address.to_string()
    }
}

/// Check that `path` is a literal route path.
///
/// Route patterns (`:id`, `*rest`, `{id}`) would either capture other paths
/// or be refused by the router at serve time.
pub fn validate_endpoint_path(path: &str) -> Result<()> {
    let invalid = |reason| Error::InvalidEndpointPath {
        path: path.to_string(),
        reason,
    };
    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.contains(['{', '}']) {
        return Err(invalid("must not contain '{' or '}'"));
    }
    if path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(invalid("segments must not start with ':' or '*'"));
    }
    Ok(())
}

/// MCP over streamable HTTP.
#[derive(Debug)]
pub struct HttpTransport {
    server: RazorpayMcpServer,
    options: HttpServerOptions,
    running: RunningSlot,
}

impl HttpTransport {
    /// Fails if the endpoint path is not a literal route path.
    pub fn new(server: RazorpayMcpServer, options: HttpServerOptions) -> Result<Self> {
        validate_endpoint_path(&options.endpoint_path)?;
        Ok(Self {
            server,
            options,
            running: RunningSlot::default(),
        })
    }

    pub fn options(&self) -> &HttpServerOptions {
        &self.options
    }

    /// Router serving the MCP endpoint, for driving requests without a listener.
    pub fn router(&self) -> Router {
        self.router_with(CancellationToken::new())
    }

    /// Address actually bound, once `start` is serving.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running.local_addr()
    }

    fn router_with(&self, sessions: CancellationToken) -> Router {
        let server = self.server.clone();
        let mut config = StreamableHttpServerConfig::default();
        config.stateful_mode = !self.options.stateless;
        config.cancellation_token = sessions;

        let service = StreamableHttpService::new(
            move || Ok(server.clone()),
            Arc::new(LocalSessionManager::default()),
            config,
        );
        Router::new().route_service(&self.options.endpoint_path, service)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn start(&self) -> Result<()> {
        let listener = TcpListener::bind(listen_address(&self.options.address))
            .await
            .map_err(|source| Error::Bind {
                address: self.options.address.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().ok();

        let running = Running::new(local_addr);
        self.running.install(running.clone());
        let _stopped = running.stopped_token().clone().drop_guard();
        let shutdown = running.shutdown_token().clone();

        let router = self.router_with(shutdown.child_token());
        tracing::info!(
            address = %self.options.address,
            local_addr = ?local_addr,
            endpoint = %self.options.endpoint_path,
            stateless = self.options.stateless,
            "HTTP transport listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(Error::Serve)?;

        tracing::info!("HTTP transport stopped");
        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        if !self.running.stop().await {
            tracing::debug!("HTTP shutdown before start; nothing to stop");
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
