// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the counter service
//!
//! Loads configuration from environment variables (and `.env`, if present).

use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .ok()
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::debug!(
                    "{} not set, using default {}",
                    env_vars::SERVER_ADDR,
                    defaults::SERVER_ADDR
                );
                defaults::SERVER_ADDR.to_string()
            });

        Config { server_addr }
    }

    /// Validates configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server_addr.trim().is_empty() {
            return Err(AppError::Config("Server address cannot be empty".to_string()));
        }

        if self.server_addr.parse::<SocketAddr>().is_err() {
            return Err(AppError::Config(format!(
                "Invalid server address '{}': expected 'ip:port'",
                self.server_addr
            )));
        }

        Ok(())
    }

    /// Parses the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.server_addr.parse()?)
    }
}
