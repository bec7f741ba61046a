//! Seed orchestration: the fixed list of template trees and where they go.
pub mod assets;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::copy::{self, CopyOptions, CopyResult};
use crate::error::{CopyError, ForgeError};
use crate::logging::Log;
use assets::AssetSource;

/// One template tree to seed: a bundled asset name and its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    /// Name of the tree inside the asset bundle.
    pub source: &'static str,
    /// Directory the tree's contents are copied into.
    pub destination: PathBuf,
}

impl CopyPlan {
    /// Pair `source` with `destination`.
    #[must_use]
    pub fn new(source: &'static str, destination: impl Into<PathBuf>) -> Self {
        Self {
            source,
            destination: destination.into(),
        }
    }
}

/// Names of the seeded trees, in seeding order.  Each lands at the same
/// relative path under the workspace root.
pub const SEED_TREES: [&str; 3] = [".github", ".toolkit-forge-sdd", "toolkit-forge-docs"];

/// Build the ordered plan list for a workspace rooted at `root`.
#[must_use]
pub fn plans(root: &Path) -> Vec<CopyPlan> {
    SEED_TREES
        .into_iter()
        .map(|name| CopyPlan::new(name, root.join(name)))
        .collect()
}

/// Seed every plan into `root`, returning the summed copy counts.
///
/// Plans run in declaration order.  The first failure stops the run;
/// trees seeded before it are left as they are.
///
/// # Errors
///
/// Returns an error if a template tree cannot be resolved or staged, or if
/// any filesystem operation during the copy fails.
pub fn run_init(
    root: &Path,
    source: &AssetSource,
    options: CopyOptions,
    log: &dyn Log,
) -> Result<CopyResult> {
    log.stage(&format!("Initializing Forge SDD toolkit at {}", root.display()));
    log.debug(&format!("templates: {}", source.describe()));

    let mut total = CopyResult::default();
    for plan in plans(root) {
        let result = seed_plan(&plan, source, options, log)
            .with_context(|| format!("failed to seed {}", plan.destination.display()))?;
        total += result;

        let shown = plan
            .destination
            .strip_prefix(root)
            .unwrap_or(&plan.destination);
        log.info(&format!(
            "Seeded {} ({} copied, {} skipped)",
            shown.display(),
            result.copied,
            result.skipped
        ));
    }

    log.stage("Summary");
    log.info(&format!(
        "Forge SDD toolkit ready. Files copied: {}, skipped: {}",
        total.copied, total.skipped
    ));
    log.info("Next steps: open this folder in VS Code and enable GitHub Copilot to pick up the prompts.");
    Ok(total)
}

/// Stage one tree, make sure its destination exists, and copy it.
///
/// The staged asset is dropped before returning, which removes any
/// temporary extraction whether or not the copy succeeded.
fn seed_plan(
    plan: &CopyPlan,
    source: &AssetSource,
    options: CopyOptions,
    log: &dyn Log,
) -> Result<CopyResult, ForgeError> {
    let staged = source.stage(plan.source)?;
    if let Some(staging) = staged.staging_dir() {
        log.debug(&format!("staged {} in {}", plan.source, staging.display()));
    }
    if !options.dry_run {
        fs::create_dir_all(&plan.destination)
            .map_err(CopyError::io("create", &plan.destination))?;
    }
    Ok(copy::copy_tree(
        staged.path(),
        &plan.destination,
        options,
        log,
    )?)
}
