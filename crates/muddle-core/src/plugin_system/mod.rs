//! # Muddle Core Plugin System
//!
//! This module provides the registry and lifecycle engine for optional
//! feature modules ("plugins") that depend on each other by name.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`class`]**: [`PluginClass`], the static description of a plugin (name,
//!   ordered direct dependencies, instance factory).
//! - **[`dependency`]**: depth-first resolution of a class's dependency closure
//!   with cycle detection ([`DependencyError`]).
//! - **[`error`]**: [`PluginSystemError`], returned by registry and manager
//!   operations.
//! - **[`instance`]**: [`EnabledPlugin`], a live plugin held by a manager, and
//!   its reverse-dependency lookup.
//! - **[`manager`]**: [`PluginManager`], the enable/disable state machine with
//!   cascading activation, cascading disable and rollback.
//! - **[`manifest`]**: declarative [`PluginManifest`]s loaded from settings.
//! - **[`registry`]**: [`PluginRegistry`], name to class lookup.
//! - **[`root`]**: [`RootPluginManager`], a manager seeded with core plugins.
//! - **[`traits`]**: the [`Plugin`] trait implemented by plugin authors.
//!
//! Everything here is synchronous and does no locking.
pub mod class;
pub mod dependency;
pub mod error;
pub mod instance;
pub mod manager;
pub mod manifest;
pub mod registry;
pub mod root;
pub mod traits;

pub use class::{PluginClass, type_name_of};
pub use dependency::DependencyError;
pub use error::PluginSystemError;
pub use instance::EnabledPlugin;
pub use manager::PluginManager;
pub use manifest::{ManifestBuilder, PluginManifest};
pub use registry::PluginRegistry;
pub use root::RootPluginManager;
pub use traits::{Plugin, PluginError};

// Test module declaration
#[cfg(test)]
mod tests;
