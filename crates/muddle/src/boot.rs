//! Startup of the plugin engine from settings.
use std::path::Path;

use log::{debug, info};

use muddle_core::{PluginRegistry, PluginSettings, Result, RootPluginManager};

/// Load settings from `path`, or use the defaults when no file is given
pub fn load_settings(path: Option<&Path>) -> Result<PluginSettings> {
    match path {
        Some(path) => Ok(PluginSettings::load(path)?),
        None => Ok(PluginSettings::default()),
    }
}

/// Every plugin class the binary knows about: the built-in core plugins plus
/// the manifests declared in settings.
pub fn catalog(settings: &PluginSettings) -> Result<PluginRegistry> {
    let mut catalog = PluginRegistry::new();
    catalog.register(core_logging::plugin_class(&settings.log_level))?;

    for manifest in &settings.plugins {
        catalog.register(manifest.clone().into_class())?;
    }
    Ok(catalog)
}

/// Build the root manager, register the rest of the catalog and enable the
/// plugins listed under `enable`.
pub fn boot(settings: &PluginSettings) -> Result<RootPluginManager> {
    let catalog = catalog(settings)?;
    let mut root = RootPluginManager::from_settings(settings, &catalog)?;

    for (name, class) in catalog.iter() {
        if !root.is_registered(name) {
            root.register(class.clone())?;
        }
    }
    debug!("Registered plugins: {:?}", root.plugins().names());

    for name in &settings.enable {
        root.enable(name)?;
    }
    info!("Boot complete, {} plugin(s) enabled", root.enabled().len());
    Ok(root)
}
