//! Unified configuration for HAT user interfaces.
//!
//! Configuration is stored in `~/.hat/config.toml` and supports partial
//! configs where unspecified values use sensible defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Lang;
use hat_viz::Theme;

/// Main configuration for all HAT interfaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HatConfig {
    /// Core settings shared across all interfaces.
    pub core: CoreConfig,

    /// Report presentation settings.
    pub report: ReportConfig,
}

/// Core settings shared across all interfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Default directory searched for benchmark result files.
    pub data_dir: Option<PathBuf>,

    /// Recently opened files (up to `max_recent`).
    pub recent_files: Vec<PathBuf>,

    /// Maximum entries in the recent files list.
    pub max_recent: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            recent_files: Vec::new(),
            max_recent: 10,
        }
    }
}

/// Report presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Chart theme (dark/light).
    pub theme: Theme,

    /// UI language.
    pub language: Lang,

    /// Cap on points per scatter chart.
    pub max_chart_points: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Lang::En,
            max_chart_points: 3000,
        }
    }
}

impl HatConfig {
    /// Get the default config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".hat"))
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Add a file to the recent files list.
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.core.recent_files.retain(|p| p != &path);
        self.core.recent_files.insert(0, path);
        self.core.recent_files.truncate(self.core.max_recent);
    }
}
