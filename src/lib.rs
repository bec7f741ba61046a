//! Forge SDD toolkit initializer.
//!
//! Seeds a workspace with the toolkit's template trees (Copilot prompts and
//! instructions, toolkit state, and documentation) from an asset bundle
//! compiled into the binary.
//!
//! The public API is organised into four layers:
//!
//! - **[`copy`]**: recursive tree copy with a skip/overwrite policy
//! - **[`seed`]**: the ordered seed plans and the bundled assets they draw on
//! - **[`commands`]**: subcommand orchestration (`init`, `version`)
//! - **[`logging`]**: tracing-backed console and file output
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod copy;
pub mod error;
pub mod logging;
pub mod seed;
