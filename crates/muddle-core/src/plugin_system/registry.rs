use std::collections::HashMap;
use std::sync::Arc;

use crate::plugin_system::class::PluginClass;
use crate::plugin_system::error::PluginSystemError;

/// Registry of known plugin classes, keyed by plugin name.
///
/// Entries are append-only: a name can be registered once and is never
/// replaced, so a class and the instances built from it always agree.
#[derive(Debug, Default, Clone)]
pub struct PluginRegistry {
    classes: HashMap<String, Arc<PluginClass>>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin class.
    ///
    /// Fails with [`PluginSystemError::AlreadyRegistered`] if the name is taken.
    pub fn register(
        &mut self,
        class: impl Into<Arc<PluginClass>>,
    ) -> Result<Arc<PluginClass>, PluginSystemError> {
        let class = class.into();
        let name = class.name().to_string();

        if self.classes.contains_key(&name) {
            return Err(PluginSystemError::AlreadyRegistered(name));
        }

        self.classes.insert(name, class.clone());
        Ok(class)
    }

    /// Get a class Arc by name
    pub fn get(&self, name: &str) -> Option<Arc<PluginClass>> {
        self.classes.get(name).cloned()
    }

    /// Check if a class is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over registered names and classes in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<PluginClass>)> {
        self.classes.iter()
    }

    /// Get the number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
