//! # Adapter Configuration
//!
//! Configuration for the GraphQL server including host, port, endpoint path
//! and CORS settings. Immutable after startup.

use serde::{Deserialize, Serialize};

/// GraphQL server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Route the adapter is mounted at (default: "/")
    #[serde(default = "default_path")]
    pub path: String,

    /// CORS allowed origins (empty means permissive, for development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Serve the interactive explorer to browsers (default: true)
    #[serde(default = "default_explorer")]
    pub explorer: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_path() -> String {
    "/".to_string()
}

fn default_explorer() -> bool {
    true
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            cors_origins: Vec::new(),
            explorer: default_explorer(),
        }
    }
}

impl GraphQLConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
