//! # Muddle Core Errors
//!
//! [`Error`] gathers the subsystem errors for application bootstrap code.
use thiserror::Error as ThisError;

use crate::config::ConfigError;
use crate::plugin_system::error::PluginSystemError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Specific, typed plugin system error
    #[error("Plugin system error: {0}")]
    PluginSystem(#[from] PluginSystemError),

    /// Settings could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
