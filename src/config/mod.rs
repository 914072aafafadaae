//! Configuration loading from TOML with environment overrides.
//!
//! A missing file is not an error: every field has a default pointing at a
//! local Marathon. `MARATHON_URL` overrides `[marathon].url` after the file
//! has been read, and an explicit URL overrides both.

pub mod logging;

use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use url::Url;

pub use logging::LoggingConfig;

use crate::error::{ConfigError, Result};

/// Environment variable overriding the API base URL.
pub const URL_ENV: &str = "MARATHON_URL";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub marathon: MarathonConfig,
    pub logging: LoggingConfig,
}

/// Orchestrator endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarathonConfig {
    /// API base URL including the version prefix, e.g. `http://127.0.0.1:8080/v2`.
    pub url: String,
    pub http: HttpConfig,
}

impl Default for MarathonConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            http: HttpConfig::default(),
        }
    }
}

fn default_url() -> String {
    "http://127.0.0.1:8080/v2".into()
}

/// HTTP transport settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts for idempotent reads on timeout or connect failure.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    5000
}

const fn default_http_connect_timeout_ms() -> u64 {
    2000
}

const fn default_http_retry_max_attempts() -> u32 {
    3
}

const fn default_http_retry_backoff_ms() -> u64 {
    250
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_url(path, None)
    }

    /// Load from `path` with an explicit URL taking precedence over both the
    /// file and `MARATHON_URL`.
    ///
    /// Validation runs once, after every override has been applied.
    pub fn load_with_url<P: AsRef<Path>>(path: P, url: Option<String>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::from_toml(&std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?)?
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Self::default()
        };

        if let Ok(env_url) = std::env::var(URL_ENV) {
            config.marathon.url = env_url;
        }
        if let Some(url) = url {
            config.marathon.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without consulting the environment.
    pub fn parse(content: &str) -> Result<Self> {
        let config = Self::from_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    fn validate(&self) -> Result<()> {
        if self.marathon.url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "marathon.url",
            }
            .into());
        }
        Url::parse(&self.marathon.url).map_err(|e| ConfigError::InvalidValue {
            field: "marathon.url",
            reason: e.to_string(),
        })?;
        if self.marathon.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "marathon.http.retry_max_attempts",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        self.logging.validate()?;
        Ok(())
    }
}
