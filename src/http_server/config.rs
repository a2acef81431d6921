//! HTTP Server Configuration
//!
//! Host, port and CORS settings for the catalog server. Every field has a
//! default so a missing or partial configuration file still serves.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 9000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin is allowed
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Default configuration with one field overridden
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Reject settings the listener cannot bind with.
    ///
    /// Port 0 would make the OS pick an ephemeral port, which defeats a
    /// fixed public endpoint, so it is rejected rather than interpreted.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.host.is_empty() {
            return Err("host must not be empty".to_string());
        }
        Ok(())
    }

    /// The `host:port` string the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
