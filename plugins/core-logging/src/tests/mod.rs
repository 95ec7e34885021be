use muddle_core::plugin_system::{PluginManager, RootPluginManager};

use super::*;

#[test]
fn test_plugin_class_metadata() {
    let class = plugin_class("debug");
    assert_eq!(class.name(), NAME);
    assert!(class.depends().is_empty());
    assert_eq!(class.description(), Some("Installs the process logger"));
}

#[test]
fn test_default_level() {
    assert_eq!(LoggingPlugin::default().level(), "info");
    assert_eq!(LoggingPlugin::new("warn").level(), "warn");
}

#[test]
fn test_enable_twice_in_one_process() {
    // The second install fails inside env_logger and must be tolerated
    let mut first = PluginManager::new();
    first.register(plugin_class("info")).unwrap();
    first.enable(NAME).unwrap();

    let mut second = PluginManager::new();
    second.register(plugin_class("debug")).unwrap();
    second.enable(NAME).unwrap();

    assert_eq!(second.shutdown().unwrap(), vec![NAME]);
    assert_eq!(first.shutdown().unwrap(), vec![NAME]);
}

#[test]
fn test_as_core_plugin() {
    let manager = RootPluginManager::new(vec![plugin_class("info")]).unwrap();
    assert!(manager.is_core(NAME));
    assert!(manager.is_enabled(NAME));
}
