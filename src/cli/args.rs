//! Command line surface
//!
//! One command: `bookshelf serve --config <path> [--port <port>]`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - an in-memory book catalog with a REST API
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the bookshelf HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_config_path() {
        let cli = Cli::try_parse_from(["bookshelf", "serve"]).unwrap();
        let Command::Serve { config, port } = cli.command;
        assert_eq!(config, PathBuf::from("./bookshelf.json"));
        assert_eq!(port, None);
    }

    #[test]
    fn test_serve_accepts_config_and_port() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "serve",
            "--config",
            "/etc/bookshelf.json",
            "--port",
            "8080",
        ])
        .unwrap();
        let Command::Serve { config, port } = cli.command;
        assert_eq!(config, PathBuf::from("/etc/bookshelf.json"));
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["bookshelf"]).is_err());
    }
}
