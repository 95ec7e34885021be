
pub mod rollback_tests;
pub mod manifest_tests;
