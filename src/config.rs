//! Configuration handling for the TUI

use crate::state::ValidationConfig;
use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "signup_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Minimum password length
    pub password_min: Option<usize>,
    /// Maximum password length
    pub password_max: Option<usize>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// Bounds are checked later by [`TuiConfig::validation_config`].
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Whether a config file is present on disk
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Password bounds, falling back to the defaults for unset values
    pub fn validation_config(&self) -> Result<ValidationConfig> {
        let defaults = ValidationConfig::default();
        let config = ValidationConfig {
            min: self.password_min.unwrap_or(defaults.min),
            max: self.password_max.unwrap_or(defaults.max),
        };
        if config.min == 0 || config.max == 0 {
            bail!("password length bounds must be positive");
        }
        if config.min > config.max {
            tracing::warn!(
                min = config.min,
                max = config.max,
                "password_min exceeds password_max; every non-empty password will be rejected"
            );
        }
        Ok(config)
    }

    /// Tracing filter from the config, or the default
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
