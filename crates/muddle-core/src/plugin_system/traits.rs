use crate::plugin_system::manager::PluginManager;

/// Error type returned by plugin hooks
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Plugin enable error: {0}")]
    EnableError(String),
    #[error("Plugin disable error: {0}")]
    DisableError(String),
}

/// Core trait that all plugins must implement
///
/// A plugin instance only exists while it is enabled in a [`PluginManager`].
/// Its name and dependencies live on the [`PluginClass`](crate::plugin_system::PluginClass)
/// that constructed it.
pub trait Plugin: Send + Sync {
    /// Called once when the plugin is activated, after all of its
    /// dependencies are enabled. Returning an error aborts the surrounding
    /// `enable` call and rolls back whatever that call activated.
    ///
    /// The default implementation does nothing and succeeds.
    fn on_enable(&self, _manager: &PluginManager) -> Result<(), PluginError> {
        Ok(())
    }

    /// Called when the plugin is disabled or rolled back. The plugin is
    /// removed from the manager whether or not this succeeds.
    ///
    /// The default implementation does nothing and succeeds.
    fn on_disable(&self, _manager: &PluginManager) -> Result<(), PluginError> {
        Ok(())
    }
}
