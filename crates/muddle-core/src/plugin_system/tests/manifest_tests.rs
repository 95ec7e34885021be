#![cfg(test)]

use crate::plugin_system::manager::PluginManager;
use crate::plugin_system::manifest::{ManifestBuilder, PluginManifest};

#[test]
fn test_manifest_new_defaults() {
    let manifest = PluginManifest::new("cluster-status");
    assert_eq!(manifest.name, "cluster-status");
    assert!(manifest.description.is_none());
    assert!(manifest.depends.is_empty());
}

#[test]
fn test_manifest_builder() {
    let manifest = ManifestBuilder::new("vm-console")
        .description("Serial console for virtual machines")
        .dependency("cluster-status")
        .dependencies(&["auth", "websocket"])
        .build();

    assert_eq!(manifest.name, "vm-console");
    assert_eq!(
        manifest.description.as_deref(),
        Some("Serial console for virtual machines")
    );
    assert_eq!(manifest.depends, vec!["cluster-status", "auth", "websocket"]);
}

#[test]
fn test_manifest_into_class() {
    let class = ManifestBuilder::new("vm-console")
        .description("console")
        .dependencies(&["cluster-status", "auth"])
        .build()
        .into_class();

    assert_eq!(class.name(), "vm-console");
    assert_eq!(class.depends(), ["cluster-status", "auth"]);
    assert_eq!(class.description(), Some("console"));
}

#[test]
fn test_manifest_plugins_enable_and_disable() {
    let mut manager = PluginManager::new();
    manager
        .register(PluginManifest::new("cluster-status").into_class())
        .unwrap();
    manager
        .register(
            ManifestBuilder::new("vm-console")
                .dependency("cluster-status")
                .build()
                .into_class(),
        )
        .unwrap();

    manager.enable("vm-console").unwrap();
    assert_eq!(manager.enabled_names(), vec!["cluster-status", "vm-console"]);

    let removed = manager.disable("cluster-status").unwrap();
    assert_eq!(removed, vec!["vm-console", "cluster-status"]);
}

#[test]
fn test_manifest_deserialize_defaults() {
    let manifest: PluginManifest = serde_json::from_str(r#"{ "name": "auth" }"#).unwrap();
    assert_eq!(manifest, PluginManifest::new("auth"));

    let manifest: PluginManifest =
        serde_json::from_str(r#"{ "name": "vm", "depends": ["auth"], "description": "VMs" }"#)
            .unwrap();
    assert_eq!(manifest.depends, vec!["auth"]);
    assert_eq!(manifest.description.as_deref(), Some("VMs"));
}
