//! Configuration loading errors.

use super::error_code::{self, LeaseErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to serialize config: {message}")]
    SerializeError { message: String },

    #[error("Unknown form type: {value}")]
    UnknownFormType { value: String },
}

impl LeaseErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
