use dotenv::dotenv;
use serde::Serialize;
use std::{env, fmt, str::FromStr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

/// Deployment environment, read from `NODE_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(ConfigError::InvalidEnvironment(other.to_owned())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("NODE_ENV must be one of \"dev\" or \"prod\", got {0:?}")]
    InvalidEnvironment(String),
}

/// Immutable process configuration. Built once at boot, then handed to
/// whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub environment: Environment,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: Environment::Dev,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok(); // loads `.env` file automatically

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parses settings from any key lookup. An unset variable, or a blank
    /// `PORT`, falls back to its default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            _ => DEFAULT_PORT,
        };

        let environment = match lookup("NODE_ENV") {
            Some(raw) => raw.parse::<Environment>()?,
            None => Environment::default(),
        };

        Ok(Self { port, environment })
    }
}
