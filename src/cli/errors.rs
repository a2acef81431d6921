//! Command line errors
//!
//! Every CLI error is fatal: it is printed to stderr and the process exits
//! non-zero. Codes are stable, messages are free-form.

use std::fmt;
use std::io;

/// Machine-readable failure categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Bad configuration file
    ConfigError,
    /// Filesystem failure
    IoError,
    /// Server failed to start or crashed
    ServerFailed,
}

impl CliErrorCode {
    /// Stable machine-readable identifier, printed ahead of the message
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BOOKSHELF_CLI_CONFIG_ERROR",
            Self::IoError => "BOOKSHELF_CLI_IO_ERROR",
            Self::ServerFailed => "BOOKSHELF_CLI_SERVER_FAILED",
        }
    }
}

/// A fatal command line failure
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Build an error from a code and message
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Configuration file could not be read, parsed or validated
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Filesystem access failed
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Runtime construction or the server loop failed
    pub fn server_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerFailed, msg)
    }

    /// The machine-readable code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("JSON error: {}", e))
    }
}

/// Result alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::config_error("port must be greater than zero");
        assert_eq!(
            err.to_string(),
            "BOOKSHELF_CLI_CONFIG_ERROR: port must be greater than zero"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = CliError::from(io_err);
        assert_eq!(err.code(), &CliErrorCode::IoError);
        assert!(err.message().contains("denied"));
    }

    #[test]
    fn test_from_serde_error_is_config_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = CliError::from(serde_err);
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
