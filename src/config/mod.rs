//! Configuration module for the pricing service.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: HTTP server and data locations.

mod data_config;
mod server_config;

pub use data_config::DataEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub data: DataEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env().context("Failed to load server config")?,
            data: DataEnvConfig::from_env(),
        })
    }
}
