//! Document submission errors.

use super::error_code::{self, LeaseErrorCode};

/// Errors raised while preparing a document-generation request.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Form data is empty. Please fill the form before submitting.")]
    EmptyForm,

    #[error("Form is incomplete, unresolved fields: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error("Unknown document format: {value} (expected pdf or docx)")]
    UnknownFormat { value: String },

    #[error("Failed to serialize form payload: {message}")]
    Serialize { message: String },
}

impl LeaseErrorCode for SubmissionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyForm => error_code::FORM_EMPTY,
            Self::Incomplete { .. } => error_code::FORM_INCOMPLETE,
            Self::UnknownFormat { .. } => error_code::UNKNOWN_FORMAT,
            Self::Serialize { .. } => error_code::PAYLOAD_SERIALIZE_ERROR,
        }
    }
}
