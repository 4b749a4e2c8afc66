//! Configuration management.
//!
//! Configuration can come from:
//! - Config file (~/.config/launchdarkly-blocks/config.toml, or an explicit path)
//! - Environment variables (LAUNCHDARKLY_*), which win over the file

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{ApiClient, ApiError, Credentials, DEFAULT_BASE_URL};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No LaunchDarkly API key configured; set LAUNCHDARKLY_API_KEY or launchdarkly.api_key")]
    MissingApiKey,

    #[error("Invalid value for {name}: '{value}'")]
    InvalidOverride { name: String, value: String },

    #[error(transparent)]
    Client(#[from] ApiError),
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub launchdarkly: LaunchDarklyConfig,
}

/// LaunchDarkly connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct LaunchDarklyConfig {
    /// Access token sent with every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// API origin; override for proxies and self-hosted deployments
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Dated API version sent as `LD-API-Version`
    #[serde(default)]
    pub api_version: Option<String>,

    /// Overall request timeout in seconds; unset uses the transport default
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for LaunchDarklyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: None,
            timeout_seconds: None,
        }
    }
}

impl std::fmt::Debug for LaunchDarklyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchDarklyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Load configuration from the default location plus environment overrides.
    ///
    /// A missing default config file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_dir().join("config.toml");
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from an explicit file plus environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse a config file without applying environment overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the config directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("launchdarkly-blocks"))
            .unwrap_or_else(|| PathBuf::from(".launchdarkly-blocks"))
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Empty values are ignored. A timeout that is not a whole number of seconds
    /// is an error.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ld = &mut self.launchdarkly;
        if let Some(key) = lookup("LAUNCHDARKLY_API_KEY").filter(|v| !v.is_empty()) {
            ld.api_key = Some(key);
        }
        if let Some(url) = lookup("LAUNCHDARKLY_BASE_URL").filter(|v| !v.is_empty()) {
            ld.base_url = url;
        }
        if let Some(version) = lookup("LAUNCHDARKLY_API_VERSION").filter(|v| !v.is_empty()) {
            ld.api_version = Some(version);
        }
        if let Some(timeout) = lookup("LAUNCHDARKLY_TIMEOUT_SECONDS").filter(|v| !v.is_empty()) {
            let parsed = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidOverride {
                    name: "LAUNCHDARKLY_TIMEOUT_SECONDS".into(),
                    value: timeout.clone(),
                })?;
            ld.timeout_seconds = Some(parsed);
        }
        Ok(())
    }

    /// Validated credentials from this configuration
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let api_key = self
            .launchdarkly
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(Credentials::new(api_key, &self.launchdarkly.base_url)?)
    }

    /// Request helper built from this configuration
    pub fn client(&self) -> Result<ApiClient, ConfigError> {
        let mut builder = ApiClient::builder(self.credentials()?);
        if let Some(version) = &self.launchdarkly.api_version {
            builder = builder.api_version(version.clone());
        }
        if let Some(secs) = self.launchdarkly.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build()?)
    }
}
