//! Server lifecycle state.
//!
//! Provides [`ServerState`] and [`LifecycleHandle`] for tracking where the
//! process is between construction and exit.
//!
//! ```text
//! Starting ──► Serving ──► ShuttingDown ──► Stopped
//!     │           │
//!     └───────────┴──► Failed
//! ```
//!
//! # Usage
//!
//! ```rust
//! use razorpay_mcp_core::lifecycle::{LifecycleHandle, ServerState};
//!
//! let handle = LifecycleHandle::new("http");
//! assert_eq!(handle.state(), ServerState::Starting);
//!
//! handle.set_state(ServerState::Serving);
//! assert!(handle.state().is_serving());
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

// ============================================================================
// ServerState
// ============================================================================

/// State of the server process.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerState {
    /// Configuration, server and transport are being built.
    Starting,
    /// The transport is running and accepting requests.
    Serving,
    /// A graceful shutdown is in progress.
    ShuttingDown,
    /// The transport has stopped.
    Stopped,
    /// Construction or serving failed.
    Failed(String),
}

impl ServerState {
    /// Returns `true` while the transport is accepting requests.
    pub fn is_serving(&self) -> bool {
        matches!(self, Self::Serving)
    }

    /// Returns `true` if the process is done (Stopped or Failed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped | Self::Failed(_))
    }
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starting => write!(f, "starting"),
            Self::Serving => write!(f, "serving"),
            Self::ShuttingDown => write!(f, "shutting-down"),
            Self::Stopped => write!(f, "stopped"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// LifecycleHandle
// ============================================================================

/// Thread-safe handle for observing and updating server state.
///
/// Cheap to clone (Arc internals). State changes are broadcast
/// to all subscribers via a watch channel.
#[derive(Clone)]
pub struct LifecycleHandle {
    inner: Arc<LifecycleInner>,
}

struct LifecycleInner {
    name: String,
    tx: watch::Sender<ServerState>,
    started_at: Instant,
}

impl LifecycleHandle {
    /// Create a handle for the named transport.
    ///
    /// Initial state is [`ServerState::Starting`].
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(ServerState::Starting);
        Self {
            inner: Arc::new(LifecycleInner {
                name: name.into(),
                tx,
                started_at: Instant::now(),
            }),
        }
    }

    /// Get the transport name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the current state.
    pub fn state(&self) -> ServerState {
        self.inner.tx.borrow().clone()
    }

    /// Update the state. All subscribers are notified.
    pub fn set_state(&self, state: ServerState) {
        tracing::debug!(transport = %self.inner.name, %state, "lifecycle transition");
        self.inner.tx.send_replace(state);
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ServerState> {
        self.inner.tx.subscribe()
    }

    /// Wait until the server is Serving, has failed, or the timeout elapses.
    pub async fn wait_serving(&self, timeout: Duration) -> Result<(), String> {
        let mut rx = self.subscribe();
        let deadline = tokio::time::sleep(timeout);
        tokio::pin!(deadline);

        loop {
            {
                let state = rx.borrow_and_update().clone();
                match state {
                    ServerState::Serving => return Ok(()),
                    ServerState::Failed(reason) => {
                        return Err(format!("'{}' failed: {reason}", self.inner.name));
                    }
                    ServerState::Stopped => {
                        return Err(format!("'{}' stopped before serving", self.inner.name));
                    }
                    _ => {}
                }
            }

            tokio::select! {
                _ = &mut deadline => {
                    return Err(format!(
                        "'{}' not serving after {timeout:?} (state: {})",
                        self.inner.name, self.state()
                    ));
                }
                result = rx.changed() => {
                    if result.is_err() {
                        return Err(format!("'{}' lifecycle channel closed", self.inner.name));
                    }
                }
            }
        }
    }

    /// Elapsed time since the handle was created.
    pub fn elapsed(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}

impl fmt::Debug for LifecycleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_state_display() {
        assert_eq!(ServerState::Starting.to_string(), "starting");
        assert_eq!(ServerState::Serving.to_string(), "serving");
        assert_eq!(ServerState::ShuttingDown.to_string(), "shutting-down");
        assert_eq!(ServerState::Stopped.to_string(), "stopped");
        assert_eq!(
            ServerState::Failed("bind: address in use".to_string()).to_string(),
            "failed: bind: address in use"
        );
    }

    #[test]
    fn test_server_state_predicates() {
        assert!(ServerState::Serving.is_serving());
        assert!(!ServerState::Starting.is_serving());
        assert!(!ServerState::ShuttingDown.is_serving());

        assert!(ServerState::Stopped.is_terminal());
        assert!(ServerState::Failed("x".into()).is_terminal());
        assert!(!ServerState::Serving.is_terminal());
        assert!(!ServerState::ShuttingDown.is_terminal());
    }

    #[test]
    fn test_handle_initial_state() {
        let handle = LifecycleHandle::new("http");
        assert_eq!(handle.name(), "http");
        assert_eq!(handle.state(), ServerState::Starting);
    }

    #[test]
    fn test_handle_transitions() {
        let handle = LifecycleHandle::new("stdio");

        handle.set_state(ServerState::Serving);
        assert_eq!(handle.state(), ServerState::Serving);

        handle.set_state(ServerState::ShuttingDown);
        assert_eq!(handle.state(), ServerState::ShuttingDown);

        handle.set_state(ServerState::Stopped);
        assert_eq!(handle.state(), ServerState::Stopped);
    }

    #[test]
    fn test_handle_clone_shares_state() {
        let handle1 = LifecycleHandle::new("shared");
        let handle2 = handle1.clone();

        handle1.set_state(ServerState::Serving);
        assert_eq!(handle2.state(), ServerState::Serving);
    }

    #[test]
    fn test_handle_subscribe() {
        let handle = LifecycleHandle::new("http");
        let mut rx = handle.subscribe();
        assert_eq!(*rx.borrow(), ServerState::Starting);

        handle.set_state(ServerState::Serving);
        assert_eq!(*rx.borrow_and_update(), ServerState::Serving);
    }

    #[tokio::test]
    async fn test_wait_serving_success() {
        let handle = LifecycleHandle::new("http");
        let h = handle.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            h.set_state(ServerState::Serving);
        });

        assert!(handle.wait_serving(Duration::from_secs(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_wait_serving_timeout() {
        let handle = LifecycleHandle::new("slow");
        let result = handle.wait_serving(Duration::from_millis(50)).await;
        assert!(result.unwrap_err().contains("not serving after"));
    }

    #[tokio::test]
    async fn test_wait_serving_failed() {
        let handle = LifecycleHandle::new("broken");
        let h = handle.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            h.set_state(ServerState::Failed("address in use".to_string()));
        });

        let err = handle.wait_serving(Duration::from_secs(1)).await.unwrap_err();
        assert!(err.contains("address in use"));
    }

    #[tokio::test]
    async fn test_wait_serving_already_stopped() {
        let handle = LifecycleHandle::new("done");
        handle.set_state(ServerState::Stopped);
        let err = handle.wait_serving(Duration::from_millis(50)).await.unwrap_err();
        assert!(err.contains("stopped before serving"));
    }

    #[test]
    fn test_handle_debug() {
        let handle = LifecycleHandle::new("debug-test");
        let debug = format!("{handle:?}");
        assert!(debug.contains("debug-test"));
        assert!(debug.contains("LifecycleHandle"));
    }

    fn _assert_send_sync<T: Send + Sync>() {}
    #[test]
    fn test_handle_send_sync() {
        _assert_send_sync::<LifecycleHandle>();
        _assert_send_sync::<ServerState>();
    }
}
