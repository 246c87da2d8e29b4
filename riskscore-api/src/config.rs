use std::{env, path::PathBuf};

use dotenv::dotenv;

const HOST_VAR: &str = "RISKSCORE_HOST";
const PORT_VAR: &str = "RISKSCORE_PORT";
const LOG_CONFIG_VAR: &str = "RISKSCORE_LOG_CONFIG";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid RISKSCORE_PORT value \"{0}\"")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_config: PathBuf,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            log_config: lookup(LOG_CONFIG_VAR)
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned())
                .into(),
        })
    }
}
