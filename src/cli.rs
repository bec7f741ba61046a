//! Command-line argument definitions.
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the toolkit initializer.
#[derive(Parser, Debug)]
#[command(
    name = "toolkit-forge",
    about = "Initialize the Forge SDD toolkit structure in the current workspace.",
    version
)]
pub struct Cli {
    /// Subcommand to run; usage is printed when absent
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Directory to seed (defaults to $TOOLKIT_FORGE_ROOT, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Read templates from this directory instead of the bundled copy
    /// (defaults to $TOOLKIT_FORGE_ASSETS when set)
    #[arg(long, global = true, value_name = "DIR")]
    pub assets: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the .github, .toolkit-forge-sdd, and toolkit-forge-docs directories with seeded content
    Init(InitOpts),
    /// Print version information
    Version,
}

/// Options for the `init` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitOpts {
    /// Overwrite existing files instead of skipping them
    #[arg(long)]
    pub force: bool,
}

/// Exit code for argument errors that end the run before any command starts.
///
/// `--help` and `--version` succeed, a missing or unknown subcommand exits
/// with `1` after printing usage, and anything else is left to clap
/// (`None`).
#[must_use]
pub fn usage_exit_code(err: &clap::Error) -> Option<u8> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Some(0),
        ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Some(1),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::parse_from(["toolkit-forge", "init"]);
        assert!(
            matches!(&cli.command, Some(Command::Init(_))),
            "Expected Init command"
        );
        if let Some(Command::Init(opts)) = cli.command {
            assert!(!opts.force);
        }
        assert!(!cli.global.dry_run);
        assert!(cli.global.root.is_none());
        assert!(cli.global.assets.is_none());
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["toolkit-forge", "init", "--force"]);
        assert!(
            matches!(cli.command, Some(Command::Init(InitOpts { force: true }))),
            "--force should enable overwrite"
        );
    }

    #[test]
    fn parse_no_subcommand() {
        let cli = Cli::parse_from(["toolkit-forge"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["toolkit-forge", "version"]);
        assert!(matches!(cli.command, Some(Command::Version)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["toolkit-forge", "-v", "init"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "toolkit-forge",
            "init",
            "--dry-run",
            "--root",
            "/tmp/work",
            "--assets",
            "/tmp/templates",
        ]);
        assert!(cli.global.dry_run);
        assert_eq!(cli.global.root, Some(PathBuf::from("/tmp/work")));
        assert_eq!(cli.global.assets, Some(PathBuf::from("/tmp/templates")));
    }

    #[test]
    fn parse_dry_run_short() {
        let cli = Cli::parse_from(["toolkit-forge", "-d", "init"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn unknown_subcommand_exits_with_one() {
        let err = Cli::try_parse_from(["toolkit-forge", "bootstrap"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), Some(1));
    }

    #[test]
    fn help_exits_with_zero() {
        let err = Cli::try_parse_from(["toolkit-forge", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), Some(0));
    }

    #[test]
    fn unknown_flag_is_left_to_clap() {
        let err = Cli::try_parse_from(["toolkit-forge", "init", "--frobnicate"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), None);
    }
}
