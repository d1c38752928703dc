//! HTTP server configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;

/// HTTP server environment configuration
#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub bind_address: String,
    pub port: u16,
    pub cors_enabled: bool,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            cors_enabled: true,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid SERVER_PORT: {}", raw))?,
            Err(_) => defaults.port,
        };

        let cors_enabled = match env::var("CORS_ENABLED") {
            Ok(raw) => raw
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .with_context(|| format!("Invalid CORS_ENABLED: {}", raw))?,
            Err(_) => defaults.cors_enabled,
        };

        Ok(Self {
            bind_address: env::var("SERVER_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port,
            cors_enabled,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
