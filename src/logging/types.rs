//! The [`Log`] trait shared by every component that reports progress.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to the global `tracing`
/// subscriber; tests substitute a recording implementation so they can assert
/// on what was reported without installing a subscriber.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
}
