use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use log::{debug, info};

use crate::config::PluginSettings;
use crate::plugin_system::class::PluginClass;
use crate::plugin_system::error::{PluginSystemError, Result};
use crate::plugin_system::manager::PluginManager;
use crate::plugin_system::registry::PluginRegistry;

/// Plugin manager that starts out with its core plugins registered and enabled.
///
/// Every other operation is available through `Deref` to [`PluginManager`].
#[derive(Debug)]
pub struct RootPluginManager {
    manager: PluginManager,
    core: Vec<String>,
}

impl RootPluginManager {
    /// Register every core class, then enable them in the given order.
    ///
    /// The classes must have distinct names; a repeat fails with
    /// [`PluginSystemError::AlreadyRegistered`].
    pub fn new<I, C>(core_classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Arc<PluginClass>>,
    {
        let mut manager = PluginManager::new();
        let mut core = Vec::new();

        for class in core_classes {
            let class = manager.register(class)?;
            core.push(class.name().to_string());
        }
        Self::start(manager, core)
    }

    /// Build a root manager whose core plugins are the ones named in
    /// `settings.core_plugins`, looked up in `catalog`.
    ///
    /// Dependencies of a core plugin are registered from `catalog` too, but
    /// only the named plugins count as core. Repeated names are ignored.
    pub fn from_settings(settings: &PluginSettings, catalog: &PluginRegistry) -> Result<Self> {
        let mut manager = PluginManager::new();
        let mut core: Vec<String> = Vec::new();

        for name in &settings.core_plugins {
            if core.contains(name) {
                debug!("Core plugin '{}' listed more than once", name);
                continue;
            }
            let class = catalog
                .get(name)
                .ok_or_else(|| PluginSystemError::UnknownPlugin(name.clone()))?;

            for dep in class.get_depends(catalog)? {
                if !manager.is_registered(dep.name()) {
                    manager.register(dep)?;
                }
            }
            if !manager.is_registered(name) {
                manager.register(class)?;
            }
            core.push(name.clone());
        }
        Self::start(manager, core)
    }

    fn start(mut manager: PluginManager, core: Vec<String>) -> Result<Self> {
        for name in &core {
            manager.enable(name)?;
        }

        info!("Root plugin manager ready with {} core plugin(s)", core.len());
        Ok(Self { manager, core })
    }

    /// Names of the core plugins, in the order they were enabled
    pub fn core_plugins(&self) -> &[String] {
        &self.core
    }

    pub fn is_core(&self, name: &str) -> bool {
        self.core.iter().any(|c| c == name)
    }

    pub fn into_inner(self) -> PluginManager {
        self.manager
    }
}

impl Deref for RootPluginManager {
    type Target = PluginManager;

    fn deref(&self) -> &Self::Target {
        &self.manager
    }
}

impl DerefMut for RootPluginManager {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.manager
    }
}
