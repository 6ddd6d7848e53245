//! Stdio transport.
//!
//! Serves a single MCP session over the process's stdin/stdout. In this
//! mode stdout carries protocol messages only; logs must go to stderr or a
//! log file.

use async_trait::async_trait;
use rmcp::service::{ServerInitializeError, serve_server_with_ct};
use tokio::io::{AsyncRead, AsyncWrite};

use super::{Running, RunningSlot, Transport};
use crate::error::{Error, Result};
use crate::server::RazorpayMcpServer;

/// MCP over stdin/stdout.
#[derive(Debug)]
pub struct StdioTransport {
    server: RazorpayMcpServer,
    running: RunningSlot,
}

impl StdioTransport {
    pub fn new(server: RazorpayMcpServer) -> Self {
        Self {
            server,
            running: RunningSlot::default(),
        }
    }

    /// Serve one session over an arbitrary reader/writer pair.
    ///
    /// Returns `Ok(())` when the peer closes the stream or `shutdown` is
    /// requested, including during the initialize handshake. Any other
    /// handshake failure is an error.
    pub async fn serve_io<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let running = Running::new(None);
        self.running.install(running.clone());
        let _stopped = running.stopped_token().clone().drop_guard();
        let shutdown = running.shutdown_token().clone();

        let handshake = serve_server_with_ct(self.server.clone(), (reader, writer), shutdown.clone());
        let service = tokio::select! {
            result = handshake => match result {
                Ok(service) => service,
                Err(ServerInitializeError::ConnectionClosed(context)) => {
                    tracing::info!(%context, "stdio input closed before initialize");
                    return Ok(());
                }
                Err(e) => return Err(Error::Stdio(format!("MCP handshake failed: {e}"))),
            },
            () = shutdown.cancelled() => {
                tracing::debug!("stdio shutdown requested before handshake completed");
                return Ok(());
            }
        };

        tracing::debug!("stdio session initialized");
        let reason = service
            .waiting()
            .await
            .map_err(|e| Error::Stdio(format!("session task failed: {e}")))?;
        tracing::info!(?reason, "stdio session ended");
        Ok(())
    }

    /// `true` once `start` has published its running state.
    pub fn is_running(&self) -> bool {
        self.running
            .get()
            .is_some_and(|r| !r.stopped_token().is_cancelled())
    }
}

#[async_trait]
impl Transport for StdioTransport {
    fn name(&self) -> &'static str {
        "stdio"
    }

    async fn start(&self) -> Result<()> {
        self.serve_io(tokio::io::stdin(), tokio::io::stdout()).await
    }

    async fn shutdown(&self) -> Result<()> {
        if !self.running.stop().await {
            tracing::debug!("stdio shutdown before start; nothing to stop");
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
