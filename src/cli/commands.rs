//! Command implementations
//!
//! The single `serve` command loads configuration, builds the HTTP server
//! and blocks on it inside a fresh tokio runtime. A missing configuration
//! file is not an error; the server falls back to defaults.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Load the server configuration from a JSON file.
///
/// A file that does not exist yields the default configuration. A file
/// that exists but cannot be read, parsed or validated is a hard error.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        log_event_with_fields(
            Event::ConfigDefaulted,
            &[("path", &path.display().to_string())],
        );
        return Ok(HttpServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("path", &path.display().to_string()),
            ("port", &config.port.to_string()),
        ],
    );

    Ok(config)
}

/// Start the HTTP server and block until it exits.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Parse the command line and dispatch. This is what `main` calls.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch an already-parsed command.
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
    }
}
