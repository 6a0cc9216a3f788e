//! Tracing output setup.
//!
//! The TUI owns the terminal, so diagnostics go to a log file; watch it
//! with `tail -f` from another terminal. Writing is non-blocking: a
//! background worker drains the buffer, and the returned [`LogGuard`]
//! flushes it on drop. Hold the guard for the life of `main`.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;

/// Keeps the background log writer alive; dropping it flushes and stops
/// the worker. Returned from [`init`], held by `main`.
#[derive(Debug)]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log path has no usable directory/file-name split.
    #[error("Log path needs a parent directory and a file name: {0:?}")]
    NotAFilePath(PathBuf),

    /// Could not create the log directory.
    #[error("Failed to create log directory {path:?}: {source}")]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A tracing subscriber is already installed in this process.
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

/// Split a log path into directory and file name, rejecting paths that
/// have neither (e.g. `/`).
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    match (log_path.parent(), log_path.file_name().and_then(|n| n.to_str())) {
        (Some(dir), Some(file)) if !file.is_empty() => Ok((dir, file)),
        _ => Err(LoggingError::NotAFilePath(log_path.to_path_buf())),
    }
}

/// Install the global tracing subscriber writing to `log_path`.
///
/// The directory is created if missing. `RUST_LOG` selects the filter,
/// defaulting to `info`. ANSI colors are off - this is a file.
pub fn init(log_path: &Path) -> Result<LogGuard, LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDirectory {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(LogGuard { _worker: worker })
}
