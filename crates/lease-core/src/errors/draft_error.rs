//! Draft persistence errors.

use super::error_code::{self, LeaseErrorCode};

/// Errors that can occur while saving or loading a form draft.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Draft I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Draft at {path} is not valid JSON: {message}")]
    Malformed { path: String, message: String },

    #[error("Draft at {path} must be a JSON object of fields")]
    NotAnObject { path: String },
}

impl LeaseErrorCode for DraftError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::DRAFT_IO_ERROR,
            Self::Malformed { .. } | Self::NotAnObject { .. } => error_code::DRAFT_FORMAT_ERROR,
        }
    }
}
