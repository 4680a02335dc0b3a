// src/config.rs
//! Configuration file parsing
//!
//! Supports TOML configuration files with the following sections:
//! - [storage] - Snapshot location and startup behaviour
//! - [logging] - Default tracing filter
//!
//! Every key is optional; an absent file means all defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Name of the application directory under the platform config dir
const APP_DIR: &str = "recipe-blog";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct BlogConfig {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageSection,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// Recipe snapshot file
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,

    /// Start with an empty collection when the snapshot does not exist
    /// (a malformed snapshot is always fatal)
    #[serde(default)]
    pub create_missing: bool,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            create_missing: false,
        }
    }
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("recipes.json")
}

/// Logging configuration section
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl BlogConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: BlogConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else
    /// the defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.snapshot.as_os_str().is_empty() {
            anyhow::bail!("storage.snapshot must not be empty");
        }

        EnvFilter::try_new(&self.logging.filter)
            .with_context(|| format!("Invalid logging.filter: {}", self.logging.filter))?;

        Ok(())
    }

    /// Snapshot file path
    pub fn snapshot_path(&self) -> &Path {
        &self.storage.snapshot
    }
}

/// `<config_dir>/recipe-blog/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}
