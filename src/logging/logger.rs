//! Structured logger backed by the global `tracing` subscriber.
use std::path::{Path, PathBuf};

use super::types::Log;
use super::utils::log_file_path;

/// Implement the methods of [`Log`] by delegating to inherent methods of the
/// same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with dry-run awareness.
///
/// Every message becomes a `tracing` event.  The console layer installed by
/// [`init_subscriber`](super::subscriber::init_subscriber) renders it for the
/// terminal and the file layer appends it to
/// `$XDG_CACHE_HOME/toolkit-forge/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Stores the log file path for display at the end of a run.  The file
    /// itself is created by the subscriber's file layer; this constructor
    /// does not write to it.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Create a logger that reports `path` as its log file.
    #[must_use]
    pub fn with_log_file(path: impl Into<PathBuf>) -> Self {
        Self {
            log_file: Some(path.into()),
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub fn log_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "toolkit_forge::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "toolkit_forge::dry_run", "{msg}");
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);
}
