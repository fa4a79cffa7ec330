//! Environment-driven settings for assembling a [`Client`](crate::client::Client).

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const ENDPOINT_ENV_VAR: &str = "GQLINK_ENDPOINT";
pub const CREDENTIALS_PATH_ENV_VAR: &str = "GQLINK_CREDENTIALS_PATH";
pub const REQUEST_TIMEOUT_ENV_VAR: &str = "GQLINK_REQUEST_TIMEOUT_SECS";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Look up a required environment variable.
///
/// Absent and empty values are both treated as missing.
pub fn get_env(key: &str) -> Result<String, ConfigError> {
    get_env_from(&|key| std::env::var(key).ok(), key)
}

fn get_env_from(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar {
            key: key.to_string(),
        }),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Where to persist the credential pair. `None` keeps it in memory.
    pub credentials_path: Option<PathBuf>,
    pub endpoint: reqwest::Url,
    pub request_timeout: Duration,
}
impl ClientConfig {
    pub fn new(endpoint: reqwest::Url) -> Self {
        Self {
            credentials_path: None,
            endpoint,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key/value source (the process
    /// environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint_str = get_env_from(&lookup, ENDPOINT_ENV_VAR)?;
        let endpoint = reqwest::Url::parse(endpoint_str.trim())
            .map_err(|err| ConfigError::InvalidValue {
                key: ENDPOINT_ENV_VAR.to_string(),
                message: err.to_string(),
            })?;

        let credentials_path = lookup(CREDENTIALS_PATH_ENV_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout = match lookup(REQUEST_TIMEOUT_ENV_VAR) {
            Some(secs) if !secs.trim().is_empty() => {
                let secs = secs.trim().parse::<u64>()
                    .map_err(|err| ConfigError::InvalidValue {
                        key: REQUEST_TIMEOUT_ENV_VAR.to_string(),
                        message: err.to_string(),
                    })?;
                Duration::from_secs(secs)
            },
            _ => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            credentials_path,
            endpoint,
            request_timeout,
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable `{key}`: {message}")]
    InvalidValue {
        key: String,
        message: String,
    },

    #[error("Missing required environment variable `{key}`")]
    MissingEnvVar {
        key: String,
    },
}
