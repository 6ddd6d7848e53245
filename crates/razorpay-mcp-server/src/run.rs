//! Run a transport until a shutdown signal or a fatal transport error.
//!
//! `start` runs on a spawned task and reports on a oneshot channel; the
//! calling task races that channel against the shutdown signal. Whichever
//! fires first, `shutdown` is then called exactly once, bounded by a timeout.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use razorpay_mcp::Transport;
use razorpay_mcp_core::{LifecycleHandle, ServerState};
use tokio::sync::oneshot;

use crate::error::{Error, Result};

/// Upper bound on graceful shutdown.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Serve `transport` until `shutdown_signal` resolves or the transport stops.
///
/// Returns the transport's error if it failed first, otherwise the result
/// of the bounded shutdown. The lifecycle handle ends in `Stopped` or
/// `Failed`.
pub async fn run_until<F>(
    transport: Arc<dyn Transport>,
    lifecycle: &LifecycleHandle,
    shutdown_signal: F,
    timeout: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (tx, rx) = oneshot::channel();
    let serving = Arc::clone(&transport);
    tokio::spawn(async move {
        // The receiver is gone once the signal has won the race.
        let _ = tx.send(serving.start().await);
    });
    lifecycle.set_state(ServerState::Serving);
    tracing::info!(transport = transport.name(), "transport started");

    let served = tokio::select! {
        () = shutdown_signal => {
            tracing::info!("shutdown signal received");
            Ok(())
        }
        result = rx => match result {
            Ok(Ok(())) => {
                tracing::info!(transport = transport.name(), "transport stopped on its own");
                Ok(())
            }
            Ok(Err(e)) => {
                tracing::error!(transport = transport.name(), error = %e, "transport failed");
                Err(Error::Server(e))
            }
            Err(e) => Err(Error::Task(e.to_string())),
        },
    };

    lifecycle.set_state(ServerState::ShuttingDown);
    let stopped = match tokio::time::timeout(timeout, transport.shutdown()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "shutdown failed");
            Err(Error::Server(e))
        }
        Err(_) => {
            tracing::error!(?timeout, "shutdown timed out");
            Err(Error::ShutdownTimeout(timeout))
        }
    };

    let outcome = served.and(stopped);
    match &outcome {
        Ok(()) => {
            tracing::info!(elapsed = ?lifecycle.elapsed(), "server stopped");
            lifecycle.set_state(ServerState::Stopped);
        }
        Err(e) => lifecycle.set_state(ServerState::Failed(e.to_string())),
    }
    outcome
}

/// Resolves on SIGINT or SIGTERM (Ctrl-C elsewhere).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
            (Ok(mut interrupt), Ok(mut terminate)) => {
                tokio::select! {
                    _ = interrupt.recv() => {}
                    _ = terminate.recv() => {}
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "failed to install signal handlers; falling back to Ctrl-C");
                ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    ctrl_c().await;
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C; waiting indefinitely");
        std::future::pending::<()>().await;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_util::sync::CancellationToken;

    #[derive(Clone, Copy)]
    enum Behavior {
        /// `start` blocks until `shutdown`.
        Serve,
        /// `start` fails immediately.
        FailStart,
        /// `shutdown` never completes.
        HangOnShutdown,
    }

    struct FakeTransport {
        behavior: Behavior,
        released: CancellationToken,
        shutdowns: AtomicUsize,
    }

    impl FakeTransport {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                released: CancellationToken::new(),
                shutdowns: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn start(&self) -> razorpay_mcp::Result<()> {
            match self.behavior {
                Behavior::FailStart => Err(razorpay_mcp::Error::Stdio("boom".to_string())),
                Behavior::Serve | Behavior::HangOnShutdown => {
                    self.released.cancelled().await;
                    Ok(())
                }
            }
        }

        async fn shutdown(&self) -> razorpay_mcp::Result<()> {
            self.shutdowns.fetch_add(1, Ordering::SeqCst);
            if let Behavior::HangOnShutdown = self.behavior {
                std::future::pending::<()>().await;
            }
            self.released.cancel();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_signal_triggers_single_shutdown() {
        let fake = FakeTransport::new(Behavior::Serve);
        let lifecycle = LifecycleHandle::new("test");
        let (signal_tx, signal_rx) = oneshot::channel::<()>();

        let run = {
            let transport: Arc<dyn Transport> = fake.clone();
            let lifecycle = lifecycle.clone();
            tokio::spawn(async move {
                run_until(
                    transport,
                    &lifecycle,
                    async {
                        let _ = signal_rx.await;
                    },
                    Duration::from_secs(5),
                )
                .await
            })
        };

        lifecycle.wait_serving(Duration::from_secs(5)).await.unwrap();
        signal_tx.send(()).unwrap();
        run.await.unwrap().unwrap();

        assert_eq!(fake.shutdowns.load(Ordering::SeqCst), 1);
        assert_eq!(lifecycle.state(), ServerState::Stopped);
    }

    #[tokio::test]
    async fn test_transport_error_wins_race() {
        let fake = FakeTransport::new(Behavior::FailStart);
        let lifecycle = LifecycleHandle::new("test");

        let err = run_until(
            fake.clone(),
            &lifecycle,
            std::future::pending(),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Server(razorpay_mcp::Error::Stdio(_))));
        assert_eq!(fake.shutdowns.load(Ordering::SeqCst), 1);
        assert!(matches!(lifecycle.state(), ServerState::Failed(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_timeout() {
        let fake = FakeTransport::new(Behavior::HangOnShutdown);
        let lifecycle = LifecycleHandle::new("test");

        let err = run_until(fake.clone(), &lifecycle, async {}, SHUTDOWN_TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ShutdownTimeout(t) if t == SHUTDOWN_TIMEOUT));
        assert_eq!(fake.shutdowns.load(Ordering::SeqCst), 1);
        assert!(lifecycle.state().is_terminal());
    }

    #[tokio::test]
    async fn test_transport_stopping_cleanly_is_ok() {
        let fake = FakeTransport::new(Behavior::Serve);
        fake.released.cancel();
        let lifecycle = LifecycleHandle::new("test");

        run_until(
            fake.clone(),
            &lifecycle,
            std::future::pending(),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert_eq!(fake.shutdowns.load(Ordering::SeqCst), 1);
        assert_eq!(lifecycle.state(), ServerState::Stopped);
    }
}
