use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Default bind address when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let raw = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let bind_address = raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddress(raw, e.to_string()))?;

        Ok(Self { bind_address })
    }
}
