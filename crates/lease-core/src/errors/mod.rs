pub mod error_code;

mod config_error;
mod draft_error;
mod session_error;
mod submission_error;

pub use config_error::ConfigError;
pub use draft_error::DraftError;
pub use session_error::SessionError;
pub use submission_error::SubmissionError;
