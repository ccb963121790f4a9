//! Process configuration read from the environment.
//!
//! Values come from real environment variables or a `.env` file loaded by
//! `dotenv` before [`Config::from_env`] runs.

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bind address (`HOST`)
    pub host: String,
    /// Bind port (`PORT`)
    pub port: u16,
    /// Front-end directory mounted at `/static` (`STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Tracing filter directive (`RUST_LOG`)
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            log_filter: lookup("RUST_LOG").filter(|f| !f.trim().is_empty()),
        })
    }
}
