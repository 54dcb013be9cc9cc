//! Configuration errors.

use std::path::Path;

use super::error_code::{self, DarpiErrorCode};

/// Errors from loading, merging, and validating `DarpiConfig`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("Config file could not be read: {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// A config file or string is not valid TOML for `DarpiConfig`.
    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    /// The merged configuration breaks a value constraint.
    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// An environment override could not be parsed.
    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn parse(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        Self::ParseError {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, message: &str) -> Self {
        Self::ValidationFailed {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl DarpiErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
