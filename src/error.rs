//! Domain-specific error types for the toolkit initializer.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors ([`AssetError`], [`CopyError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ForgeError
//! ├── Asset(AssetError): bundled template tree cannot be located or staged
//! └── Copy(CopyError)  : traversal, directory creation, removal, or copy failed
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level error type for the toolkit initializer.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// A bundled template tree could not be resolved.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A tree copy failed part-way through.
    #[error(transparent)]
    Copy(#[from] CopyError),
}

/// Errors that arise while resolving a bundled template tree to a directory.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The embedded bundle has no tree with this name.
    #[error("template '{name}' is not part of the bundled assets")]
    NotBundled {
        /// Name of the requested template tree.
        name: String,
    },

    /// The override asset directory does not contain this tree.
    #[error("template '{name}' not found at {}", path.display())]
    Missing {
        /// Name of the requested template tree.
        name: String,
        /// Directory that was expected to hold it.
        path: PathBuf,
    },

    /// Extracting the embedded tree into a staging directory failed.
    #[error("failed to stage template '{name}'")]
    Stage {
        /// Name of the template tree being staged.
        name: String,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Errors that arise while copying a template tree.
#[derive(Error, Debug)]
pub enum CopyError {
    /// The copy source is absent or not a directory.
    #[error("source is not a directory: {}", path.display())]
    SourceNotDirectory {
        /// The offending source root.
        path: PathBuf,
    },

    /// Walking the source tree failed.
    #[error("failed to walk {}", path.display())]
    Walk {
        /// Source root being walked.
        path: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },

    /// The walk yielded an entry that is not below the source root.
    #[error("{} is not inside {}", path.display(), root.display())]
    OutsideSource {
        /// Entry reported by the walk.
        path: PathBuf,
        /// Source root being walked.
        root: PathBuf,
    },

    /// A filesystem operation on a single path failed.
    #[error("failed to {action} {}", path.display())]
    Io {
        /// Short verb phrase for the failed operation (e.g. `"copy to"`).
        action: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl CopyError {
    /// Build a closure that wraps an [`io::Error`] for `path`, for use with
    /// [`Result::map_err`].
    pub(crate) fn io<'a>(
        action: &'static str,
        path: &'a Path,
    ) -> impl FnOnce(io::Error) -> Self + 'a {
        move |source| Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
