//! Command: print version information.

/// Version string embedded at build time, falling back to the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("TOOLKIT_FORGE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the toolkit-forge version to stdout.
pub fn run() {
    println!("toolkit-forge {}", version());
}
