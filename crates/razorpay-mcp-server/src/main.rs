#![forbid(unsafe_code)]

//! Razorpay MCP Server
//!
//! Serves Razorpay tools over MCP, on streamable HTTP (`http`, the default)
//! or stdin/stdout (`stdio`).

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use razorpay_mcp_core::{EffectiveConfig, LifecycleHandle, ServerState, init_logging};
use razorpay_mcp_server::app::{banner, build_server, build_transport};
use razorpay_mcp_server::cli::{Cli, VERSION};
use razorpay_mcp_server::run::{SHUTDOWN_TIMEOUT, run_until, shutdown_signal};

/// How long leftover tasks get once `run` has returned.
///
/// A stdin read sits on a blocking thread that only returns on input or EOF,
/// so the runtime must not wait for it after a signal.
const RUNTIME_DRAIN: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = runtime.block_on(run(cli));
    runtime.shutdown_timeout(RUNTIME_DRAIN);

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mode = cli.mode();
    let config = EffectiveConfig::load(&cli.overrides(), mode).context("failed to load configuration")?;

    // Dropped when `run` returns, before the runtime is shut down.
    let _log = init_logging(config.log_file()).context("failed to create logger")?;

    let lifecycle = LifecycleHandle::new(razorpay_mcp::NAME);
    tracing::debug!(?config, %mode, "configuration resolved");

    let built = build_server(&config, mode, VERSION)
        .and_then(|server| build_transport(server, &config, mode));
    let transport = match built {
        Ok(transport) => transport,
        Err(e) => {
            lifecycle.set_state(ServerState::Failed(e.to_string()));
            return Err(e).context("failed to create server");
        }
    };

    eprintln!("{}", banner(&config, mode));
    run_until(transport, &lifecycle, shutdown_signal(), SHUTDOWN_TIMEOUT)
        .await
        .with_context(|| format!("{mode} server error"))?;
    Ok(())
}
