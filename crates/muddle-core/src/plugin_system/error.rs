//! # Muddle Plugin System Errors
//!
//! Defines error types specific to the plugin system.
//!
//! [`PluginSystemError`] is what every registry and manager operation returns.
//! Hook failures keep the original [`PluginError`] as their source, and
//! dependency resolution failures keep the original [`DependencyError`].
use crate::plugin_system::dependency::DependencyError;
use crate::plugin_system::traits::PluginError;

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Unknown plugin: '{0}'")]
    UnknownPlugin(String),

    #[error("Plugin already registered: '{0}'")]
    AlreadyRegistered(String),

    #[error("Dependency resolution failed: {0}")]
    DependencyResolution(#[from] DependencyError),

    #[error("Failed to enable plugin '{plugin_id}': {source}")]
    EnableFailed {
        plugin_id: String,
        #[source]
        source: PluginError,
    },

    #[error("Errors while disabling plugin '{plugin_id}': {}", format_failures(.failures))]
    DisableFailed {
        plugin_id: String,
        failures: Vec<(String, PluginError)>,
    },
}

impl PluginSystemError {
    /// Whether this error reports a dependency cycle
    pub fn is_cyclic_dependency(&self) -> bool {
        matches!(
            self,
            PluginSystemError::DependencyResolution(DependencyError::CyclicDependency(_))
        )
    }
}

fn format_failures(failures: &[(String, PluginError)]) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("{}: {}", name, err))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Shorthand for Result with the plugin system error type
pub type Result<T> = std::result::Result<T, PluginSystemError>;
