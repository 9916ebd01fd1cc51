//! # lease-clauses
//!
//! Composes the dynamic clauses of the lease deed from flat form fields.
//!
//! Every clause follows the same shape: a discriminator field selects one
//! template, parameters are substituted with fallbacks, toggle-gated
//! fragments are appended in a fixed order, and checkbox lists are joined.
//! Composition never fails. Unresolved input shows up as placeholder text
//! and, separately, in each clause's [`Completeness`].

pub mod catalogue;
pub mod clause;
pub mod composer;
pub mod families;
pub mod payload;
pub mod preview;
pub mod registry;
pub mod session;
pub mod submission;
pub mod template;

pub use clause::{ClauseFamily, ClauseId};
pub use composer::{compose_clause, is_complete, ClauseComposer, Completeness};
pub use payload::to_payload;
pub use preview::{preview, PreviewSection};
pub use registry::ComposerRegistry;
pub use session::FormSession;
pub use submission::{build_document_request, DocumentFormat, DocumentRequest};
pub use template::VariantTag;
