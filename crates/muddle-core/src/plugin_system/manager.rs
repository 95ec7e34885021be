use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::plugin_system::class::PluginClass;
use crate::plugin_system::error::{PluginSystemError, Result};
use crate::plugin_system::instance::EnabledPlugin;
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::PluginError;

/// In-process plugin manager.
///
/// Holds the registered plugin classes and the live instances of the enabled
/// ones. Enabling a plugin first enables its whole dependency closure;
/// disabling a plugin first disables everything that depends on it.
///
/// The manager does no locking of its own. Wrap it in a lock to share it
/// between threads.
#[derive(Default)]
pub struct PluginManager {
    plugins: PluginRegistry,
    enabled: HashMap<String, Arc<EnabledPlugin>>,
    next_sequence: u64,
}

impl PluginManager {
    /// Create a manager with nothing registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin class without enabling it.
    ///
    /// A name can only be registered once; repeats fail with
    /// [`PluginSystemError::AlreadyRegistered`].
    pub fn register(&mut self, class: impl Into<Arc<PluginClass>>) -> Result<Arc<PluginClass>> {
        let class = self.plugins.register(class)?;
        debug!("Registered plugin '{}'", class.name());
        Ok(class)
    }

    /// Registered plugin classes
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    /// Currently enabled plugins, keyed by name
    pub fn enabled(&self) -> &HashMap<String, Arc<EnabledPlugin>> {
        &self.enabled
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.plugins.contains(name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains_key(name)
    }

    /// Get an enabled plugin by name
    pub fn get_enabled(&self, name: &str) -> Option<Arc<EnabledPlugin>> {
        self.enabled.get(name).cloned()
    }

    /// Names of enabled plugins in activation order
    pub fn enabled_names(&self) -> Vec<String> {
        self.enabled_by_sequence()
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Resolve the dependency closure of a registered plugin
    pub fn get_depends(&self, name: &str) -> Result<Vec<Arc<PluginClass>>> {
        let class = self
            .plugins
            .get(name)
            .ok_or_else(|| PluginSystemError::UnknownPlugin(name.to_string()))?;
        Ok(class.get_depends(&self.plugins)?)
    }

    /// Enable a plugin along with any of its dependencies that are not yet enabled.
    ///
    /// Enabling an already enabled plugin returns the existing instance. If any
    /// activation fails, every plugin this call activated is disabled again in
    /// reverse order and the original error is returned; plugins that were
    /// enabled before the call are left alone.
    pub fn enable(&mut self, name: &str) -> Result<Arc<EnabledPlugin>> {
        let class = self
            .plugins
            .get(name)
            .ok_or_else(|| PluginSystemError::UnknownPlugin(name.to_string()))?;

        if let Some(existing) = self.enabled.get(name) {
            debug!("Plugin '{}' is already enabled", name);
            return Ok(existing.clone());
        }

        let mut pending = class.get_depends(&self.plugins)?;
        pending.push(class);

        // Activated during this call, in order
        let mut activated: Vec<Arc<EnabledPlugin>> = Vec::new();
        for class in pending {
            if self.enabled.contains_key(class.name()) {
                continue;
            }
            match self.activate(class) {
                Ok(plugin) => activated.push(plugin),
                Err(e) => {
                    warn!(
                        "Enabling '{}' failed, rolling back {} plugin(s): {}",
                        name,
                        activated.len(),
                        e
                    );
                    self.rollback(activated);
                    return Err(e);
                }
            }
        }

        activated
            .pop()
            .ok_or_else(|| PluginSystemError::UnknownPlugin(name.to_string()))
    }

    /// Disable a plugin and every enabled plugin that depends on it.
    ///
    /// Dependents are disabled before the plugins they depend on. The plugin's
    /// own dependencies stay enabled. Returns the disabled names in the order
    /// they were removed; a registered plugin that is not enabled yields an
    /// empty list.
    ///
    /// Every plugin in the cascade is removed even if its disable hook fails.
    /// Hook failures are reported together afterwards as
    /// [`PluginSystemError::DisableFailed`].
    pub fn disable(&mut self, name: &str) -> Result<Vec<String>> {
        if !self.plugins.contains(name) {
            return Err(PluginSystemError::UnknownPlugin(name.to_string()));
        }
        let Some(target) = self.enabled.get(name).cloned() else {
            debug!("Plugin '{}' is not enabled, nothing to disable", name);
            return Ok(Vec::new());
        };

        let mut cascade = target.get_depended(self);
        cascade.push(target);
        // Dependencies are always activated before their dependents
        cascade.sort_by(|a, b| b.sequence().cmp(&a.sequence()));

        self.deactivate_all(name, cascade)
    }

    /// Disable every enabled plugin, most recently activated first
    pub fn shutdown(&mut self) -> Result<Vec<String>> {
        let mut all = self.enabled_by_sequence();
        all.reverse();
        info!("Shutting down {} enabled plugin(s)", all.len());
        self.deactivate_all("<all>", all)
    }

    fn enabled_by_sequence(&self) -> Vec<Arc<EnabledPlugin>> {
        let mut plugins: Vec<Arc<EnabledPlugin>> = self.enabled.values().cloned().collect();
        plugins.sort_by_key(|p| p.sequence());
        plugins
    }

    /// Build, enable and record a single plugin whose dependencies are already enabled
    fn activate(&mut self, class: Arc<PluginClass>) -> Result<Arc<EnabledPlugin>> {
        let depends: Vec<String> = class
            .get_depends(&self.plugins)?
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let instance = class.instantiate();
        instance
            .on_enable(self)
            .map_err(|source| PluginSystemError::EnableFailed {
                plugin_id: class.name().to_string(),
                source,
            })?;

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let plugin = Arc::new(EnabledPlugin::new(class, instance, depends, sequence));
        self.enabled
            .insert(plugin.name().to_string(), plugin.clone());
        info!("Plugin '{}' enabled", plugin.name());
        Ok(plugin)
    }

    /// Undo the activations of a failed `enable` call, newest first
    fn rollback(&mut self, activated: Vec<Arc<EnabledPlugin>>) {
        for plugin in activated.into_iter().rev() {
            if let Err(e) = self.deactivate(&plugin) {
                warn!(
                    "Disable hook of '{}' failed during rollback: {}",
                    plugin.name(),
                    e
                );
            }
        }
    }

    fn deactivate_all(
        &mut self,
        requested: &str,
        plugins: Vec<Arc<EnabledPlugin>>,
    ) -> Result<Vec<String>> {
        let mut removed = Vec::with_capacity(plugins.len());
        let mut failures = Vec::new();

        for plugin in plugins {
            if let Err(e) = self.deactivate(&plugin) {
                warn!("Disable hook of '{}' failed: {}", plugin.name(), e);
                failures.push((plugin.name().to_string(), e));
            }
            removed.push(plugin.name().to_string());
        }

        if failures.is_empty() {
            Ok(removed)
        } else {
            Err(PluginSystemError::DisableFailed {
                plugin_id: requested.to_string(),
                failures,
            })
        }
    }

    /// Run the disable hook and drop the plugin from `enabled` regardless of the outcome
    fn deactivate(&mut self, plugin: &EnabledPlugin) -> std::result::Result<(), PluginError> {
        let outcome = plugin.plugin().on_disable(self);
        self.enabled.remove(plugin.name());
        info!("Plugin '{}' disabled", plugin.name());
        outcome
    }
}

impl Debug for PluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginManager")
            .field("plugins", &self.plugins.names())
            .field("enabled", &self.enabled_names())
            .finish()
    }
}
