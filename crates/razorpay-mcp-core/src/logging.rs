//! Logger construction.
//!
//! Installs a `tracing` subscriber that writes either to a log file or to
//! stderr. Stdout is never used: in stdio mode it carries the MCP stream.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

const DEFAULT_FILTER: &str = "info";

/// Release handle returned by [`init_logging`].
///
/// Flushes the log file to disk when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard releases the log file"]
pub struct LogGuard {
    file: Option<Arc<File>>,
}

impl LogGuard {
    /// Returns `true` when logs are written to a file rather than stderr.
    pub fn is_file(&self) -> bool {
        self.file.is_some()
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let _ = file.sync_all();
        }
    }
}

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. With a
/// `log_file`, output is appended to that file without ANSI colours.
/// If a subscriber is already installed the existing one is kept.
pub fn init_logging(log_file: Option<&Path>) -> Result<LogGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_file {
        Some(path) => {
            let file = Arc::new(open_log_file(path)?);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::clone(&file))
                .with_ansi(false)
                .try_init();
            Ok(LogGuard { file: Some(file) })
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
            Ok(LogGuard { file: None })
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io_with_path(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("server.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_bad_path() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory cannot be opened as a log file.
        let result = open_log_file(dir.path());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_init_logging_with_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("server.log");
        let guard = init_logging(Some(&path)).unwrap();
        assert!(guard.is_file());
        assert!(path.exists());
    }

    #[test]
    fn test_init_logging_stderr() {
        let guard = init_logging(None).unwrap();
        assert!(!guard.is_file());
    }
}
