//! Transport adapters binding [`RazorpayMcpServer`](crate::RazorpayMcpServer)
//! onto stdio or HTTP.
//!
//! # Lifecycle
//!
//! `start` blocks for as long as the transport serves. `shutdown` may be
//! called from another task at any time. Before `start` has published its
//! running state it returns `Ok(())` at once and leaves the request behind,
//! so a `start` that is still binding stops as soon as it goes live.

pub mod http;
pub mod stdio;

use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

pub use http::{HttpServerOptions, HttpTransport, listen_address, validate_endpoint_path};
pub use stdio::StdioTransport;

/// A way of serving the MCP server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in logs and the user agent (`http`, `stdio`).
    fn name(&self) -> &'static str;

    /// Serve until input ends, `shutdown` is called, or a fatal error occurs.
    async fn start(&self) -> Result<()>;

    /// Stop serving and wait for `start` to return.
    ///
    /// Callers bound this with their own timeout.
    async fn shutdown(&self) -> Result<()>;
}

// ============================================================================
// Running state
// ============================================================================

/// Handles published by `start` once the transport is live.
#[derive(Clone, Debug)]
pub(crate) struct Running {
    /// Cancelled to request shutdown.
    shutdown: CancellationToken,
    /// Cancelled when `start` returns, on every path.
    stopped: CancellationToken,
    local_addr: Option<SocketAddr>,
}

impl Running {
    pub(crate) fn new(local_addr: Option<SocketAddr>) -> Self {
        Self {
            shutdown: CancellationToken::new(),
            stopped: CancellationToken::new(),
            local_addr,
        }
    }

    pub(crate) fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    pub(crate) fn stopped_token(&self) -> &CancellationToken {
        &self.stopped
    }
}

/// Slot holding the running state; empty until `start` fills it.
#[derive(Debug, Default)]
pub(crate) struct RunningSlot(Mutex<SlotState>);

#[derive(Debug, Default)]
struct SlotState {
    running: Option<Running>,
    stop_requested: bool,
}

impl RunningSlot {
    /// Publish `running`; cancels it straight away if a stop came first.
    pub(crate) fn install(&self, running: Running) {
        let mut state = self.0.lock().unwrap_or_else(|e| e.into_inner());
        if state.stop_requested {
            tracing::debug!("stop was requested before the transport went live");
            running.shutdown.cancel();
        }
        state.running = Some(running);
    }

    pub(crate) fn get(&self) -> Option<Running> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).running.clone()
    }

    pub(crate) fn local_addr(&self) -> Option<SocketAddr> {
        self.get().and_then(|r| r.local_addr)
    }

    /// Request shutdown and wait for `start` to finish.
    ///
    /// Returns `false` when nothing was running yet; the request is kept
    /// for the next `install`.
    pub(crate) async fn stop(&self) -> bool {
        let running = {
            let mut state = self.0.lock().unwrap_or_else(|e| e.into_inner());
            state.stop_requested = true;
            state.running.clone()
        };
        let Some(running) = running else {
            return false;
        };
        running.shutdown.cancel();
        running.stopped.cancelled().await;
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stop_empty_slot() {
        let slot = RunningSlot::default();
        assert!(!slot.stop().await);
        assert!(slot.local_addr().is_none());
    }

    #[tokio::test]
    async fn test_stop_waits_for_stopped() {
        let slot = RunningSlot::default();
        let running = Running::new(None);
        slot.install(running.clone());

        let shutdown = running.shutdown_token().clone();
        let stopped = running.stopped_token().clone();
        let server = tokio::spawn(async move {
            shutdown.cancelled().await;
            stopped.cancel();
        });

        assert!(slot.stop().await);
        server.await.unwrap();
        assert!(running.stopped_token().is_cancelled());
    }

    #[tokio::test]
    async fn test_stop_before_install_cancels_on_install() {
        let slot = RunningSlot::default();
        assert!(!slot.stop().await);

        let running = Running::new(None);
        slot.install(running.clone());
        assert!(running.shutdown_token().is_cancelled());
    }

    #[test]
    fn test_install_without_stop_stays_live() {
        let slot = RunningSlot::default();
        let running = Running::new(None);
        slot.install(running.clone());
        assert!(!running.shutdown_token().is_cancelled());
    }

    #[test]
    fn test_local_addr() {
        let slot = RunningSlot::default();
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        slot.install(Running::new(Some(addr)));
        assert_eq!(slot.local_addr(), Some(addr));
    }
}
