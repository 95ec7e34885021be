use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::plugin_system::class::PluginClass;
use crate::plugin_system::registry::PluginRegistry;

/// Error that can occur when resolving dependencies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    /// A declared dependency is not known to the registry
    #[error("Required plugin not found: '{name}' (required by '{required_by}')")]
    MissingPlugin { name: String, required_by: String },

    /// Dependency cycle detected, listed along the path that closes it
    #[error("Circular dependency detected: {}", .0.join(" -> "))]
    CyclicDependency(Vec<String>),
}

/// Depth-first walk state for one resolution
struct Resolver<'a> {
    registry: &'a PluginRegistry,
    /// Names on the active recursion path, outermost first
    visiting: Vec<String>,
    seen: HashSet<String>,
    resolved: Vec<Arc<PluginClass>>,
}

impl<'a> Resolver<'a> {
    fn visit(&mut self, class: &PluginClass) -> Result<(), DependencyError> {
        self.visiting.push(class.name().to_string());

        for dep_name in class.depends() {
            if let Some(pos) = self.visiting.iter().position(|n| n == dep_name) {
                let mut cycle = self.visiting[pos..].to_vec();
                cycle.push(dep_name.clone());
                return Err(DependencyError::CyclicDependency(cycle));
            }
            if self.seen.contains(dep_name) {
                continue;
            }

            let dep = self
                .registry
                .get(dep_name)
                .ok_or_else(|| DependencyError::MissingPlugin {
                    name: dep_name.clone(),
                    required_by: class.name().to_string(),
                })?;

            self.visit(&dep)?;
            self.seen.insert(dep_name.clone());
            self.resolved.push(dep);
        }

        self.visiting.pop();
        Ok(())
    }
}

/// Resolve the ordered, de-duplicated dependency closure of `root`.
pub(crate) fn resolve(
    root: &PluginClass,
    registry: &PluginRegistry,
) -> Result<Vec<Arc<PluginClass>>, DependencyError> {
    let mut resolver = Resolver {
        registry,
        visiting: Vec::new(),
        seen: HashSet::new(),
        resolved: Vec::new(),
    };
    resolver.visit(root)?;

    debug!(
        "Resolved dependencies of '{}': [{}]",
        root.name(),
        resolver
            .resolved
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(resolver.resolved)
}
