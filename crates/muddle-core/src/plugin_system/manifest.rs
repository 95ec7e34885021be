use log::info;
use serde::{Deserialize, Serialize};

use crate::plugin_system::class::PluginClass;
use crate::plugin_system::manager::PluginManager;
use crate::plugin_system::traits::{Plugin, PluginError};

/// Represents a plugin manifest that describes a plugin declaratively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Unique plugin name
    pub name: String,

    /// Plugin description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Names of the plugins this one depends on, in order
    #[serde(default)]
    pub depends: Vec<String>,
}

impl PluginManifest {
    /// Create a new plugin manifest with no dependencies
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            depends: Vec::new(),
        }
    }

    /// Add a dependency
    pub fn add_dependency(&mut self, name: &str) -> &mut Self {
        self.depends.push(name.to_string());
        self
    }

    /// Turn the manifest into a plugin class whose instances only log their
    /// transitions
    pub fn into_class(self) -> PluginClass {
        let plugin_name = self.name.clone();
        let mut class = PluginClass::new(self.name, move || ManifestPlugin {
            name: plugin_name.clone(),
        });
        for dep in self.depends {
            class = class.depends_on(dep);
        }
        if let Some(description) = self.description {
            class = class.with_description(description);
        }
        class
    }
}

/// Builder for creating a plugin manifest
pub struct ManifestBuilder {
    manifest: PluginManifest,
}

impl ManifestBuilder {
    /// Create a new manifest builder
    pub fn new(name: &str) -> Self {
        Self {
            manifest: PluginManifest::new(name),
        }
    }

    /// Set the plugin description
    pub fn description(mut self, description: &str) -> Self {
        self.manifest.description = Some(description.to_string());
        self
    }

    /// Add a dependency
    pub fn dependency(mut self, name: &str) -> Self {
        self.manifest.add_dependency(name);
        self
    }

    /// Add multiple dependencies
    pub fn dependencies(mut self, names: &[&str]) -> Self {
        for name in names {
            self.manifest.add_dependency(name);
        }
        self
    }

    /// Build the manifest
    pub fn build(self) -> PluginManifest {
        self.manifest
    }
}

/// Instance type behind manifest-declared plugins
struct ManifestPlugin {
    name: String,
}

impl Plugin for ManifestPlugin {
    fn on_enable(&self, _manager: &PluginManager) -> Result<(), PluginError> {
        info!("Manifest plugin '{}' enabled", self.name);
        Ok(())
    }

    fn on_disable(&self, _manager: &PluginManager) -> Result<(), PluginError> {
        info!("Manifest plugin '{}' disabled", self.name);
        Ok(())
    }
}
