//! Resolution of bundled template trees to concrete directories.
//!
//! The templates under `assets/` are compiled into the binary.  Copying
//! works on real paths, so an embedded tree is extracted into a temporary
//! staging directory that lives exactly as long as the returned
//! [`StagedAsset`].  A filesystem override (`--assets`) is used in place.
use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use tempfile::TempDir;

use crate::error::AssetError;

static BUNDLE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Where template trees come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// The bundle compiled into the binary.
    Embedded,
    /// A directory whose immediate children are the template trees.
    Directory(PathBuf),
}

/// A template tree available on disk for the duration of a copy.
///
/// When the tree was extracted from the embedded bundle, the staging
/// directory is deleted when this value is dropped, on success and error
/// paths alike.
#[derive(Debug)]
pub struct StagedAsset {
    path: PathBuf,
    staging: Option<TempDir>,
}

impl StagedAsset {
    /// Directory holding the tree's contents.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Root of the temporary staging area, if the tree was extracted.
    #[must_use]
    pub fn staging_dir(&self) -> Option<&Path> {
        self.staging.as_ref().map(TempDir::path)
    }
}

impl AssetSource {
    /// Make the tree called `name` available as a directory.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotBundled`] if the embedded bundle lacks `name`,
    /// [`AssetError::Missing`] if the override directory lacks it, or
    /// [`AssetError::Stage`] if extraction fails.
    pub fn stage(&self, name: &str) -> Result<StagedAsset, AssetError> {
        match self {
            Self::Embedded => stage_embedded(&BUNDLE, name),
            Self::Directory(root) => {
                let path = root.join(name);
                if !path.is_dir() {
                    return Err(AssetError::Missing {
                        name: name.to_string(),
                        path,
                    });
                }
                Ok(StagedAsset {
                    path,
                    staging: None,
                })
            }
        }
    }

    /// Human-readable origin, for log output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => format!("bundled templates ({})", bundled_names().join(", ")),
            Self::Directory(root) => root.display().to_string(),
        }
    }
}

/// Top-level template trees present in the embedded bundle, sorted.
#[must_use]
pub fn bundled_names() -> Vec<String> {
    let mut names: Vec<String> = BUNDLE
        .dirs()
        .filter_map(|d| d.path().file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Extract `bundle/<name>` into a fresh temporary directory.
fn stage_embedded(bundle: &Dir<'_>, name: &str) -> Result<StagedAsset, AssetError> {
    let tree = bundle.get_dir(name).ok_or_else(|| AssetError::NotBundled {
        name: name.to_string(),
    })?;
    let stage_err = |source| AssetError::Stage {
        name: name.to_string(),
        source,
    };
    let staging = tempfile::Builder::new()
        .prefix("toolkit-forge-")
        .tempdir()
        .map_err(stage_err)?;
    // Entries keep their bundle-relative paths, so the tree lands at
    // `<staging>/<name>`.  Extraction only creates subdirectories.
    let path = staging.path().join(name);
    fs::create_dir_all(&path).map_err(stage_err)?;
    tree.extract(staging.path()).map_err(stage_err)?;
    Ok(StagedAsset {
        path,
        staging: Some(staging),
    })
}
