//! # Muddle Settings
//!
//! Loads [`PluginSettings`] from JSON, TOML or YAML files. TOML and YAML
//! support sit behind the `toml-config` and `yaml-config` features.
pub mod error;

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

use crate::plugin_system::manifest::PluginManifest;

/// Core plugins used when settings do not name any
pub const DEFAULT_CORE_PLUGINS: &[&str] = &["core-logging"];

/// Log filter used when settings do not name one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings file syntax, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Json,
    /// `.yaml` or `.yml`
    #[cfg(feature = "yaml-config")]
    Yaml,
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Canonical extension, used in log messages
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Format of a settings file, or `None` when the extension is unknown or
    /// its feature is disabled. Matching ignores case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ConfigFormat::Json),
            #[cfg(feature = "yaml-config")]
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            #[cfg(feature = "toml-config")]
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Plugin engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Plugins the root manager registers and enables at construction
    pub core_plugins: Vec<String>,
    /// Plugins enabled at startup, after the core plugins
    pub enable: Vec<String>,
    /// Log filter handed to the logging plugin
    pub log_level: String,
    /// Declarative plugins
    pub plugins: Vec<PluginManifest>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            core_plugins: DEFAULT_CORE_PLUGINS.iter().map(|s| s.to_string()).collect(),
            enable: Vec::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            plugins: Vec::new(),
        }
    }
}

impl PluginSettings {
    /// Parse settings text in the given format
    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(ConfigError::json),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(ConfigError::yaml),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(ConfigError::toml),
        }
    }

    /// Load settings from a file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ConfigError::UnsupportedConfigFormat(path.display().to_string())
        })?;
        let data = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(e, "read_settings", path.to_path_buf()))?;

        debug!("Loading {} settings from {}", format.extension(), path.display());
        Self::parse(&data, format)
    }
}
