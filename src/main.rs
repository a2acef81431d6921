//! Bookshelf CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and turns any error into
//! a stderr line plus a non-zero exit. Nothing else happens here.

use bookshelf::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
