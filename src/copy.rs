//! Recursive template-tree copy with a skip/overwrite policy.
//!
//! [`copy_tree`] replicates every file under a source root below a
//! destination root.  Each file is classified exactly once: it is either
//! copied (absent target, or present target with overwrite enabled) or
//! skipped (present target, overwrite disabled).  The first I/O failure
//! aborts the walk; files already written stay in place.
use std::fs;
use std::io;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::Path;

use filetime::FileTime;
use walkdir::{DirEntry, WalkDir};

use crate::error::CopyError;
use crate::logging::Log;

/// Outcome counts of one tree copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyResult {
    /// Files written to the destination (fresh or replacing an entry).
    pub copied: usize,
    /// Files left untouched because the target already existed.
    pub skipped: usize,
}

impl CopyResult {
    /// Build a result from explicit counts.
    #[must_use]
    pub const fn new(copied: usize, skipped: usize) -> Self {
        Self { copied, skipped }
    }

    /// Number of source files classified.
    #[must_use]
    pub const fn total(self) -> usize {
        self.copied + self.skipped
    }
}

impl Add for CopyResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.copied + rhs.copied, self.skipped + rhs.skipped)
    }
}

impl AddAssign for CopyResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for CopyResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Policy knobs for [`copy_tree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Replace entries that already exist at a target path.
    pub overwrite: bool,
    /// Classify and count without touching the filesystem.
    pub dry_run: bool,
}

impl CopyOptions {
    /// Options for a real copy with the given overwrite policy.
    #[must_use]
    pub const fn overwrite(overwrite: bool) -> Self {
        Self {
            overwrite,
            dry_run: false,
        }
    }
}

/// What currently occupies a target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing exists at the path.
    Missing,
    /// A non-directory entry exists (regular file, symlink, broken symlink).
    File,
    /// A real directory exists.
    Directory,
}

impl TargetState {
    /// Inspect `path` without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but its metadata cannot be read.
    pub fn of(path: &Path) -> Result<Self, CopyError> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Self::Directory),
            Ok(_) => Ok(Self::File),
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
                Ok(Self::Missing)
            }
            Err(e) => Err(CopyError::io("inspect", path)(e)),
        }
    }
}

/// Decision for a single source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Target is absent; copy into place.
    Copy,
    /// Target exists and overwrite is on; remove it, then copy.
    Replace,
    /// Target exists and overwrite is off; leave it alone.
    Skip,
}

impl FileAction {
    /// Apply the overwrite policy to a target's state.
    #[must_use]
    pub const fn decide(state: TargetState, overwrite: bool) -> Self {
        match (state, overwrite) {
            (TargetState::Missing, _) => Self::Copy,
            (TargetState::File | TargetState::Directory, true) => Self::Replace,
            (TargetState::File | TargetState::Directory, false) => Self::Skip,
        }
    }
}

/// Copy every file under `src` into `dest`, returning copied/skipped counts.
///
/// `dest` and any missing parents of each target are created as needed.
/// Directories are traversed but never counted; symlinks to directories are
/// neither followed nor counted.  Walk order is sorted by file name so log
/// output is stable between runs.
///
/// # Errors
///
/// Returns [`CopyError::SourceNotDirectory`] if `src` is not a directory, or
/// the first traversal or filesystem error encountered.  No rollback happens:
/// files copied before the failure remain.
pub fn copy_tree(
    src: &Path,
    dest: &Path,
    options: CopyOptions,
    log: &dyn Log,
) -> Result<CopyResult, CopyError> {
    if !src.is_dir() {
        return Err(CopyError::SourceNotDirectory {
            path: src.to_path_buf(),
        });
    }
    if !options.dry_run {
        fs::create_dir_all(dest).map_err(CopyError::io("create", dest))?;
    }

    let mut result = CopyResult::default();
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| CopyError::Walk {
            path: src.to_path_buf(),
            source,
        })?;
        if !is_copyable_file(&entry) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| CopyError::OutsideSource {
                path: entry.path().to_path_buf(),
                root: src.to_path_buf(),
            })?;
        let target = dest.join(relative);

        if !options.dry_run
            && let Some(parent) = target.parent()
        {
            fs::create_dir_all(parent).map_err(CopyError::io("create", parent))?;
        }

        let state = TargetState::of(&target)?;
        match FileAction::decide(state, options.overwrite) {
            FileAction::Skip => {
                log.info(&format!("skipping existing file: {}", target.display()));
                result.skipped += 1;
            }
            action if options.dry_run => {
                let verb = if action == FileAction::Replace {
                    "replace"
                } else {
                    "copy"
                };
                log.dry_run(&format!("would {verb} {}", target.display()));
                result.copied += 1;
            }
            action => {
                if action == FileAction::Replace {
                    remove_existing(&target, state)?;
                }
                copy_file(entry.path(), &target)?;
                log.debug(&format!(
                    "copied {} -> {}",
                    entry.path().display(),
                    target.display()
                ));
                result.copied += 1;
            }
        }
    }

    Ok(result)
}

/// Whether a walk entry counts as a file.
///
/// Symlinks are judged by what they point at, so a dangling link is a file
/// (and fails loudly on copy) while a link to a directory is ignored.
fn is_copyable_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        false
    } else if entry.path_is_symlink() {
        !entry.path().is_dir()
    } else {
        true
    }
}

/// Remove whatever occupies `path` so a file can take its place.
fn remove_existing(path: &Path, state: TargetState) -> Result<(), CopyError> {
    match state {
        TargetState::Directory => {
            fs::remove_dir_all(path).map_err(CopyError::io("remove directory", path))
        }
        TargetState::File => fs::remove_file(path).map_err(CopyError::io("remove", path)),
        TargetState::Missing => Ok(()),
    }
}

/// Copy contents and permissions, then carry over access/modification times.
fn copy_file(src: &Path, dst: &Path) -> Result<(), CopyError> {
    fs::copy(src, dst).map_err(CopyError::io("copy to", dst))?;
    let meta = fs::metadata(src).map_err(CopyError::io("read metadata of", src))?;
    filetime::set_file_times(
        dst,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
    .map_err(CopyError::io("set times on", dst))
}
