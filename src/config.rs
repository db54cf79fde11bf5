//! Configuration loading for campus-nav

use crate::error::{NavError, Result};
use crate::search::SearchConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the working directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "campus-nav.toml";

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub search: SearchSettings,
}

/// Map source settings
#[derive(Clone, Debug, Deserialize)]
pub struct MapConfig {
    /// Path to the map file, JSON or YAML by extension (default: maps/campus.json)
    #[serde(default = "default_map_path")]
    pub path: PathBuf,
}

/// Search guards
#[derive(Clone, Debug, Deserialize)]
pub struct SearchSettings {
    /// Expansion cap, 0 disables it (default: 100000)
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,

    /// Per-query deadline in milliseconds, 0 disables it (default: 0)
    #[serde(default)]
    pub timeout_ms: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_expansions: default_max_expansions(),
            timeout_ms: 0,
        }
    }
}

fn default_map_path() -> PathBuf {
    PathBuf::from("maps/campus.json")
}
fn default_max_expansions() -> usize {
    100_000
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `campus-nav.toml` from the working directory, or fall back to
    /// defaults when it does not exist
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Search engine settings, with zero meaning "no limit"
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_expansions: (self.search.max_expansions > 0).then_some(self.search.max_expansions),
            default_timeout: (self.search.timeout_ms > 0)
                .then(|| Duration::from_millis(self.search.timeout_ms)),
        }
    }
}
