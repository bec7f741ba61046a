use std::path::PathBuf;
use std::process::Command;

const VERSION_ENV: &str = "TOOLKIT_FORGE_VERSION";

fn main() {
    // Release builds pin the version through the environment; local builds
    // describe the checkout instead.
    if let Ok(version) = std::env::var(VERSION_ENV) {
        println!("cargo:rustc-env={VERSION_ENV}={version}");
    } else if let Some(version) = git(&["describe", "--tags", "--always", "--dirty"]) {
        println!("cargo:rustc-env={VERSION_ENV}={version}");
    }

    // include_dir! does not track the embedded tree on stable.
    println!("cargo:rerun-if-changed=assets");
    println!("cargo:rerun-if-env-changed={VERSION_ENV}");

    // Watch HEAD wherever the repository keeps it; outside a checkout there
    // is nothing to watch.
    if let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]).map(PathBuf::from) {
        let head = git_dir.join("HEAD");
        if head.is_file() {
            println!("cargo:rerun-if-changed={}", head.display());
            println!("cargo:rerun-if-changed={}", git_dir.join("refs").display());
        }
    }
}

/// Run git and return its trimmed stdout on success.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
