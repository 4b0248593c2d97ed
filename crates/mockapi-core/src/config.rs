//! Server configuration
//!
//! The mock server has a single fixed listen address. Tests override the
//! port with 0 to get an ephemeral one.

use crate::{Error, Result};
use std::net::SocketAddr;

/// Port the emulator expects the mock API on
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub hostname: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Resolve the configured hostname and port into a socket address
    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.hostname, self.port)
            .parse()
            .map_err(|e| Error::InvalidAddress(format!("{}:{} ({})", self.hostname, self.port, e)))
    }
}
