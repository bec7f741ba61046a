// Shared helpers for integration tests.
//
// Builds template trees in temporary directories and provides a silent
// `Log` implementation so tests can drive the copy engine and the seed
// orchestrator without installing a tracing subscriber.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use toolkit_forge::logging::Log;
use toolkit_forge::seed::SEED_TREES;

/// A [`Log`] that discards every message.
#[derive(Debug, Default)]
pub struct NullLog;

impl Log for NullLog {
    fn stage(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn dry_run(&self, _msg: &str) {}
}

/// Write `contents` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(&path, contents).expect("write file");
}

/// Every file below `root`, as sorted root-relative paths.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.expect("walk entry"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .expect("entry under root")
                .to_path_buf()
        })
        .collect();
    files.sort();
    files
}

/// A template tree in a temporary directory, spread over a few subdirectories.
pub struct TemplateTree {
    /// Temporary directory containing the tree.
    pub dir: tempfile::TempDir,
}

impl TemplateTree {
    /// Create a tree holding `count` files.
    pub fn with_files(count: usize) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        populate(dir.path(), "template", count);
        Self { dir }
    }

    /// Path to the tree root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Sorted relative paths of every file in the tree.
    pub fn files(&self) -> Vec<PathBuf> {
        list_files(self.path())
    }
}

/// Fill `root` with `count` files in a mix of top-level and nested locations.
pub fn populate(root: &Path, label: &str, count: usize) {
    for i in 0..count {
        let rel = match i % 3 {
            0 => format!("file-{i}.md"),
            1 => format!("prompts/file-{i}.prompt.md"),
            _ => format!("templates/deep/file-{i}.md"),
        };
        write_file(root, &rel, &format!("{label} {i}\n"));
    }
}

/// A directory holding all seed trees, sized as given, for use as `--assets`.
pub fn asset_root(sizes: [usize; 3]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, count) in SEED_TREES.into_iter().zip(sizes) {
        let tree = dir.path().join(name);
        fs::create_dir_all(&tree).expect("create tree dir");
        populate(&tree, name, count);
    }
    dir
}
