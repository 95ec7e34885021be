use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::plugin_system::class::PluginClass;
use crate::plugin_system::manager::PluginManager;
use crate::plugin_system::traits::Plugin;

/// A live plugin instance owned by a [`PluginManager`].
///
/// Handles are shared as `Arc<EnabledPlugin>`; the manager drops its own copy
/// when the plugin is disabled or rolled back.
pub struct EnabledPlugin {
    class: Arc<PluginClass>,
    instance: Box<dyn Plugin>,
    /// Resolved dependency closure at activation time
    depends: Vec<String>,
    /// Activation order within the owning manager
    sequence: u64,
}

impl EnabledPlugin {
    pub(crate) fn new(
        class: Arc<PluginClass>,
        instance: Box<dyn Plugin>,
        depends: Vec<String>,
        sequence: u64,
    ) -> Self {
        Self {
            class,
            instance,
            depends,
            sequence,
        }
    }

    pub fn name(&self) -> &str {
        self.class.name()
    }

    pub fn class(&self) -> &Arc<PluginClass> {
        &self.class
    }

    /// The plugin implementation
    pub fn plugin(&self) -> &dyn Plugin {
        self.instance.as_ref()
    }

    /// Names of every plugin this one required, in activation order
    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    /// Whether `name` is part of this plugin's dependency closure
    pub fn depends_on(&self, name: &str) -> bool {
        self.depends.iter().any(|d| d == name)
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Enabled plugins in `manager` whose dependency closure includes this one,
    /// in activation order.
    ///
    /// Returns nothing if `manager` does not hold this exact instance.
    pub fn get_depended(&self, manager: &PluginManager) -> Vec<Arc<EnabledPlugin>> {
        let owned = manager
            .get_enabled(self.name())
            .is_some_and(|live| std::ptr::eq(Arc::as_ptr(&live), self));
        if !owned {
            debug!(
                "Plugin '{}' is not enabled in this manager; no dependents",
                self.name()
            );
            return Vec::new();
        }

        let mut dependents: Vec<Arc<EnabledPlugin>> = manager
            .enabled()
            .values()
            .filter(|other| other.depends_on(self.name()))
            .cloned()
            .collect();
        dependents.sort_by_key(|p| p.sequence);
        dependents
    }
}

impl PartialEq for EnabledPlugin {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for EnabledPlugin {}

impl fmt::Debug for EnabledPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnabledPlugin")
            .field("name", &self.name())
            .field("depends", &self.depends)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}
