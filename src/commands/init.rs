//! Command: seed the Forge SDD toolkit into a workspace.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::cli::{GlobalOpts, InitOpts};
use crate::copy::CopyOptions;
use crate::logging::Logger;
use crate::seed::{self, assets::AssetSource};

/// Environment variable naming the directory to seed.
pub const ROOT_ENV: &str = "TOOLKIT_FORGE_ROOT";

/// Environment variable naming a template directory that replaces the
/// bundled copy.
pub const ASSETS_ENV: &str = "TOOLKIT_FORGE_ASSETS";

/// Run the init command.
///
/// # Errors
///
/// Returns an error if the workspace root or template directory cannot be
/// resolved, or if seeding any template tree fails.
pub fn run(global: &GlobalOpts, opts: &InitOpts, log: &Logger) -> Result<()> {
    log.debug(&format!("toolkit-forge {}", super::version::version()));

    let root = resolve_root(global)?;
    let source = resolve_assets(global)?;
    let options = CopyOptions {
        overwrite: opts.force,
        dry_run: global.dry_run,
    };
    if options.dry_run {
        log.dry_run("previewing only; no files will be written");
    }

    seed::run_init(&root, &source, options, log)?;

    if let Some(path) = log.log_path() {
        log.debug(&format!("log: {}", path.display()));
    }
    Ok(())
}

/// Resolve the directory to seed: `--root`, then `$TOOLKIT_FORGE_ROOT`, then
/// the current directory.
///
/// # Errors
///
/// Returns an error if the fallback to the current directory fails.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(root) = pick_dir(global.root.as_deref(), std::env::var_os(ROOT_ENV)) {
        return Ok(root);
    }
    std::env::current_dir().context("cannot determine the current directory")
}

/// Resolve where templates come from: `--assets`, then
/// `$TOOLKIT_FORGE_ASSETS`, then the bundle compiled into the binary.
///
/// # Errors
///
/// Returns an error if an override directory was given but does not exist.
pub fn resolve_assets(global: &GlobalOpts) -> Result<AssetSource> {
    match pick_dir(global.assets.as_deref(), std::env::var_os(ASSETS_ENV)) {
        Some(dir) => {
            let dir = dunce::canonicalize(&dir)
                .with_context(|| format!("template directory not found: {}", dir.display()))?;
            Ok(AssetSource::Directory(dir))
        }
        None => Ok(AssetSource::Embedded),
    }
}

/// Prefer an explicit flag over a non-empty environment value.
fn pick_dir(flag: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}
