//! # Muddle Configuration Errors
//!
//! Defines [`ConfigError`], returned while reading and parsing settings files.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization from '{format}' failed: {source}")]
    DeserializationError {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),
}

impl ConfigError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        ConfigError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }

    fn deserialization(
        format: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConfigError::DeserializationError {
            format: format.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::deserialization("json", source)
    }

    #[cfg(feature = "yaml-config")]
    pub(crate) fn yaml(source: serde_yaml::Error) -> Self {
        Self::deserialization("yaml", source)
    }

    #[cfg(feature = "toml-config")]
    pub(crate) fn toml(source: toml::de::Error) -> Self {
        Self::deserialization("toml", source)
    }
}
