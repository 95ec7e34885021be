//! # Core Logging Plugin
//!
//! Installs `env_logger` as the process logger when enabled. The filter comes
//! from the configured log level and can be overridden with `RUST_LOG`.
use env_logger::Env;
use log::{debug, info};

use muddle_core::plugin_system::{Plugin, PluginClass, PluginError, PluginManager};

/// Identifier the plugin is registered under
pub const NAME: &str = "core-logging";

pub struct LoggingPlugin {
    level: String,
}

impl LoggingPlugin {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

impl Default for LoggingPlugin {
    fn default() -> Self {
        Self::new(muddle_core::config::DEFAULT_LOG_LEVEL)
    }
}

impl Plugin for LoggingPlugin {
    fn on_enable(&self, _manager: &PluginManager) -> Result<(), PluginError> {
        let installed = env_logger::Builder::from_env(Env::default().default_filter_or(&self.level))
            .try_init();
        match installed {
            Ok(()) => info!("Initialized logging with filter '{}'", self.level),
            // Another logger owns the process already
            Err(e) => debug!("Logger already installed, keeping it: {}", e),
        }
        Ok(())
    }

    fn on_disable(&self, _manager: &PluginManager) -> Result<(), PluginError> {
        info!("Shutting down core logging");
        Ok(())
    }
}

/// Class for the logging plugin, instantiated with the given filter
pub fn plugin_class(level: &str) -> PluginClass {
    let level = level.to_string();
    PluginClass::new(NAME, move || LoggingPlugin::new(level.clone()))
        .with_description("Installs the process logger")
}

#[cfg(test)]
mod tests;
