pub mod config;
pub mod error;
pub mod plugin_system;

// Re-export key public types/traits for easier use by the binary and plugins
pub use config::PluginSettings;
pub use error::{Error, Result};
pub use plugin_system::{
    EnabledPlugin, Plugin, PluginClass, PluginError, PluginManager, PluginRegistry,
    PluginSystemError, RootPluginManager,
};
