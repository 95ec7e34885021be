#![cfg(test)]

use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::manager::PluginManager;
use crate::plugin_system::traits::PluginError;

use super::fixtures::*;

#[test]
fn test_enable_exception() {
    let mut manager = PluginManager::new();
    manager.register(fails_when_enabled()).unwrap();

    match manager.enable("FailsWhenEnabled") {
        Err(PluginSystemError::EnableFailed { plugin_id, source }) => {
            assert_eq!(plugin_id, "FailsWhenEnabled");
            assert!(matches!(source, PluginError::EnableError(_)));
        }
        other => panic!("expected EnableFailed, got {:?}", other),
    }
    assert!(manager.enabled().is_empty());
}

#[test]
fn test_enable_depends_exception() {
    // The very first dependency fails, nothing to roll back
    let mut manager = PluginManager::new();
    manager.register(fails_when_enabled()).unwrap();
    manager.register(failing_depends()).unwrap();

    let err = manager.enable("FailingDepends").unwrap_err();
    assert!(matches!(err, PluginSystemError::EnableFailed { ref plugin_id, .. } if plugin_id == "FailsWhenEnabled"));
    assert!(!manager.is_enabled("FailsWhenEnabled"));
    assert!(!manager.is_enabled("FailingDepends"));
    assert!(manager.enabled().is_empty());
}

#[test]
fn test_enable_depends_exception_with_rollback() {
    // NoDepends is enabled, then FailsWithDepends itself fails
    let mut manager = PluginManager::new();
    manager.register(no_depends()).unwrap();
    manager.register(fails_with_depends()).unwrap();

    assert!(manager.enable("FailsWithDepends").is_err());
    assert!(!manager.is_enabled("FailsWithDepends"));
    assert!(!manager.is_enabled("NoDepends"));
    assert!(manager.enabled().is_empty());
}

#[test]
fn test_enable_depends_exception_with_rollback_depends_already_enabled() {
    let mut manager = PluginManager::new();
    manager.register(no_depends()).unwrap();
    manager.register(no_depends_b()).unwrap();
    manager.register(fails_when_enabled()).unwrap();
    manager.register(depends_fails_requires_rollback()).unwrap();

    let before = manager.enable("NoDepends").unwrap();
    assert_eq!(manager.enabled().len(), 1);

    assert!(manager.enable("DependsFailsRequiresRollback").is_err());

    // Only the pre-existing plugin survives, and it is the same instance
    assert_eq!(manager.enabled().len(), 1);
    let after = manager.get_enabled("NoDepends").unwrap();
    assert!(std::sync::Arc::ptr_eq(&before, &after));
    assert!(!manager.is_enabled("DependsFailsRequiresRollback"));
    assert!(!manager.is_enabled("FailsWhenEnabled"));
    assert!(!manager.is_enabled("NoDependsB"));
}

#[test]
fn test_rollback_runs_disable_hooks_in_reverse() {
    let journal = journal();
    let mut manager = PluginManager::new();
    manager.register(recording("keep", &[], Behavior::Success, &journal)).unwrap();
    manager.register(recording("a", &["keep"], Behavior::Success, &journal)).unwrap();
    manager.register(recording("b", &["a"], Behavior::Success, &journal)).unwrap();
    manager.register(recording("boom", &["b"], Behavior::FailEnable, &journal)).unwrap();
    manager.enable("keep").unwrap();

    assert!(manager.enable("boom").is_err());
    assert_eq!(
        entries(&journal),
        vec![
            "enable:keep",
            "enable:a",
            "enable:b",
            "enable-failed:boom",
            "disable:b",
            "disable:a",
        ]
    );
    assert_eq!(manager.enabled_names(), vec!["keep"]);
}

#[test]
fn test_rollback_survives_failing_disable_hook() {
    let journal = journal();
    let mut manager = PluginManager::new();
    manager.register(recording("sticky", &[], Behavior::FailDisable, &journal)).unwrap();
    manager.register(recording("boom", &["sticky"], Behavior::FailEnable, &journal)).unwrap();

    // The enable error is reported, not the rollback error
    match manager.enable("boom") {
        Err(PluginSystemError::EnableFailed { plugin_id, .. }) => assert_eq!(plugin_id, "boom"),
        other => panic!("expected EnableFailed, got {:?}", other),
    }
    assert!(manager.enabled().is_empty());
    assert_eq!(
        entries(&journal),
        vec!["enable:sticky", "enable-failed:boom", "disable:sticky"]
    );
}

#[test]
fn test_failed_enable_can_be_retried_after_fix() {
    let journal = journal();
    let mut manager = PluginManager::new();
    manager.register(recording("base", &[], Behavior::Success, &journal)).unwrap();
    manager.register(recording("broken", &["base"], Behavior::FailEnable, &journal)).unwrap();
    manager.register(recording("fine", &["base"], Behavior::Success, &journal)).unwrap();

    assert!(manager.enable("broken").is_err());
    assert!(manager.enabled().is_empty());

    // A later, unrelated enable starts from a clean slate
    manager.enable("fine").unwrap();
    assert_eq!(manager.enabled_names(), vec!["base", "fine"]);
}
