use std::fmt;
use std::sync::Arc;

use crate::plugin_system::dependency::{self, DependencyError};
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::Plugin;

type PluginFactory = Box<dyn Fn() -> Box<dyn Plugin> + Send + Sync>;

/// Default plugin name for a type: the last path segment of its type name,
/// with any generic arguments removed.
pub fn type_name_of<P: ?Sized>() -> String {
    let full = std::any::type_name::<P>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

/// Static description of a plugin: its name, its ordered direct dependencies
/// and a factory for live instances.
pub struct PluginClass {
    name: String,
    depends: Vec<String>,
    description: Option<String>,
    factory: PluginFactory,
}

impl PluginClass {
    /// Create a class with an explicit name and instance factory
    pub fn new<P, F>(name: impl Into<String>, factory: F) -> Self
    where
        P: Plugin + 'static,
        F: Fn() -> P + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            depends: Vec::new(),
            description: None,
            factory: Box::new(move || Box::new(factory())),
        }
    }

    /// Create a class for a default-constructible plugin type, named after the type
    pub fn of<P>() -> Self
    where
        P: Plugin + Default + 'static,
    {
        Self::new(type_name_of::<P>(), P::default)
    }

    /// Override the class name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Declare a dependency on another plugin by name
    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.depends.push(name.into());
        self
    }

    /// Declare a dependency on another plugin by type, using the type's default name
    pub fn depends_on_type<P: ?Sized>(self) -> Self {
        self.depends_on(type_name_of::<P>())
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct dependencies, in declaration order
    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Build a fresh, not yet enabled, instance
    pub fn instantiate(&self) -> Box<dyn Plugin> {
        (self.factory)()
    }

    /// Resolve the full ordered dependency closure of this class through `registry`.
    ///
    /// Every prerequisite appears before anything that depends on it and the
    /// class itself is not part of the result.
    pub fn get_depends(
        &self,
        registry: &PluginRegistry,
    ) -> Result<Vec<Arc<PluginClass>>, DependencyError> {
        dependency::resolve(self, registry)
    }
}

impl fmt::Debug for PluginClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginClass")
            .field("name", &self.name)
            .field("depends", &self.depends)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PluginClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depends.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} (depends on: {})", self.name, self.depends.join(", "))
        }
    }
}
