//! Top-level subcommand entry points.
pub mod init;
pub mod version;
