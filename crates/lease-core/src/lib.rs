//! # lease-core
//!
//! Foundation crate for the lease clause composer.
//! Defines the clause config value model, form types, config, errors, tracing, and constants.
//! The clause crate and every consumer of it depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::LeaseConfig;
pub use errors::error_code::LeaseErrorCode;
pub use types::clause_config::ClauseConfig;
pub use types::collections::FxHashMap;
pub use types::form_type::FormType;
pub use types::value::ClauseValue;
