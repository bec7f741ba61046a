//! `toolkit-forge` binary entry point.
use std::process::ExitCode;

use clap::{CommandFactory as _, Parser as _};

use toolkit_forge::cli::{self, Cli, Command};
use toolkit_forge::commands;
use toolkit_forge::logging::{self, Logger};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            return match cli::usage_exit_code(&err) {
                Some(0) => {
                    let _ = err.print();
                    ExitCode::SUCCESS
                }
                Some(code) => {
                    print_usage();
                    ExitCode::from(code)
                }
                None => err.exit(),
            };
        }
    };

    let Some(command) = args.command else {
        print_usage();
        return ExitCode::from(1);
    };

    match command {
        Command::Init(opts) => {
            logging::init_subscriber(args.verbose, "init");
            let log = Logger::new("init");
            match commands::init::run(&args.global, &opts, &log) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log.error(&format!("{e:#}"));
                    ExitCode::FAILURE
                }
            }
        }
        Command::Version => {
            commands::version::run();
            ExitCode::SUCCESS
        }
    }
}

/// Print the top-level help to stderr.
fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}
