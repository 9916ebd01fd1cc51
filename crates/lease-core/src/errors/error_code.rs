//! Stable string codes for every error surfaced outside the composer.

/// Maps an error variant to a stable, machine-readable code.
pub trait LeaseErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DRAFT_IO_ERROR: &str = "DRAFT_IO_ERROR";
pub const DRAFT_FORMAT_ERROR: &str = "DRAFT_FORMAT_ERROR";
pub const DERIVED_FIELD_READ_ONLY: &str = "DERIVED_FIELD_READ_ONLY";
pub const FORM_EMPTY: &str = "FORM_EMPTY";
pub const FORM_INCOMPLETE: &str = "FORM_INCOMPLETE";
pub const UNKNOWN_FORMAT: &str = "UNKNOWN_FORMAT";
pub const PAYLOAD_SERIALIZE_ERROR: &str = "PAYLOAD_SERIALIZE_ERROR";
