//! CLI module
//!
//! Provides the command-line interface:
//! - serve: load configuration and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
