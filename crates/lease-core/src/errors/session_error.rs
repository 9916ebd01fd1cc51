//! Form session errors.

use super::error_code::{self, LeaseErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Clause output keys are recomputed from inputs and cannot be written directly.
    #[error("Field {field} is derived from clause inputs and cannot be edited")]
    DerivedField { field: String },

    #[error("Draft error: {0}")]
    Draft(#[from] super::DraftError),
}

impl LeaseErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DerivedField { .. } => error_code::DERIVED_FIELD_READ_ONLY,
            Self::Draft(e) => e.error_code(),
        }
    }
}
