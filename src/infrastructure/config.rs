// src/infrastructure/config.rs
use crate::constants::{
    API_KEY_ENV, DEFAULT_COMPLETIONS_ENDPOINT, DEFAULT_DATA_DIR, DEFAULT_MODEL, MODEL_ENV,
    REQUEST_TIMEOUT_SECS,
};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// TOML configuration for vocabdrill
///
/// The API key is never read from this file; it comes from the environment only.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub words: WordsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WordsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

// Default value functions
fn default_model() -> String { DEFAULT_MODEL.to_string() }
fn default_endpoint() -> String { DEFAULT_COMPLETIONS_ENDPOINT.to_string() }
fn default_timeout_secs() -> u64 { REQUEST_TIMEOUT_SECS }
fn default_data_dir() -> PathBuf { PathBuf::from(DEFAULT_DATA_DIR) }

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Default config file location: `<config_dir>/vocabdrill/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vocabdrill").join("config.toml"))
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load an explicitly given file, or the default file if it exists, or defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default file is not.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Loading config from provided path");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
        }

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path, refusing to overwrite an existing one
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            bail!("Config file already exists: {}", path.as_ref().display());
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

/// Settings for the AI word generator, resolved once at startup.
#[derive(Clone, PartialEq)]
pub struct AiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl AiSettings {
    /// Resolve from the config file values and the process environment
    pub fn from_env(config: &AiConfig) -> Self {
        Self::resolve(config, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit variable lookup.
    ///
    /// Blank variables count as unset. A zero timeout falls back to
    /// [`REQUEST_TIMEOUT_SECS`].
    pub fn resolve(config: &AiConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = if config.timeout_secs == 0 {
            warn!(default = REQUEST_TIMEOUT_SECS, "timeout_secs = 0 is not usable, using default");
            REQUEST_TIMEOUT_SECS
        } else {
            config.timeout_secs
        };

        Self {
            api_key: lookup(API_KEY_ENV),
            model: lookup(MODEL_ENV).unwrap_or_else(|| config.model.clone()),
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for AiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
