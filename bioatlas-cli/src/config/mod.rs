//! Configuration loading
//!
//! Values come from `~/.config/bioatlas/config.toml` (or `--config`), then
//! `BIOATLAS_*` environment variables. Missing sections fall back to
//! defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::import::BatchConfig;
use crate::import::batch::DEFAULT_BATCH_SIZE;
use crate::import::drive::DEFAULT_THUMBNAIL_WIDTH;

pub const ENV_URL: &str = "BIOATLAS_URL";
pub const ENV_API_KEY: &str = "BIOATLAS_API_KEY";
pub const ENV_TABLE: &str = "BIOATLAS_TABLE";
pub const ENV_BATCH_SIZE: &str = "BIOATLAS_BATCH_SIZE";
pub const ENV_BATCH_DELAY_MS: &str = "BIOATLAS_BATCH_DELAY_MS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub upload: UploadConfig,
    pub images: ImageConfig,
}

/// Where species rows are inserted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    pub api_key: String,
    pub table: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: "species".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub batch_size: usize,
    pub batch_delay_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub thumbnail_width: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
        }
    }
}

/// Default config file location (~/.config/bioatlas/config.toml)
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bioatlas")
        .join("config.toml")
}

impl Config {
    /// Load the config file and apply environment overrides.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };

        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            debug!("Loaded config from {}", path.display());
            Self::from_toml_str(&text)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        } else if required {
            bail!("Config file not found: {}", path.display());
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply `BIOATLAS_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.backend.url = url;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.backend.api_key = key;
        }
        if let Some(table) = lookup(ENV_TABLE) {
            self.backend.table = table;
        }
        if let Some(size) = lookup(ENV_BATCH_SIZE) {
            self.upload.batch_size = size
                .trim()
                .parse()
                .with_context(|| {
                    format!("{} must be a positive integer, got '{}'", ENV_BATCH_SIZE, size)
                })?;
        }
        if let Some(delay) = lookup(ENV_BATCH_DELAY_MS) {
            self.upload.batch_delay_ms = delay
                .trim()
                .parse()
                .with_context(|| {
                    format!(
                        "{} must be a number of milliseconds, got '{}'",
                        ENV_BATCH_DELAY_MS, delay
                    )
                })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.upload.batch_size == 0 {
            bail!("upload.batch_size must be greater than 0");
        }
        if self.backend.table.trim().is_empty() {
            bail!("backend.table must not be empty");
        }
        Ok(())
    }

    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig::builder()
            .batch_size(self.upload.batch_size)
            .delay(Duration::from_millis(self.upload.batch_delay_ms))
            .build()
    }
}
