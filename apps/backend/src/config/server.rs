use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Listener address and dealing options, read from `PINOCHLE_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed for every round created without an explicit one.
    pub deal_seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; unset and empty values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("PINOCHLE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("PINOCHLE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("PINOCHLE_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };
        let deal_seed = var("PINOCHLE_DEAL_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!(
                        "PINOCHLE_DEAL_SEED must be an unsigned integer, got '{raw}'"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            deal_seed,
        })
    }
}
