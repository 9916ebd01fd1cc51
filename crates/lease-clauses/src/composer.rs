//! The clause composer contract and the top-level `compose_clause` entry point.

use lease_core::ClauseConfig;
use serde::Serialize;

use crate::clause::ClauseId;
use crate::families;

/// Composes one clause from a config.
///
/// Implementations are pure: the same config always yields the same text,
/// and unresolved input degrades to placeholder text instead of an error.
pub trait ClauseComposer: Send + Sync {
    fn id(&self) -> ClauseId;

    /// Every field `compose` reads. A change to any other field cannot
    /// change the output.
    fn dependencies(&self) -> &'static [&'static str];

    fn compose(&self, config: &ClauseConfig) -> String;

    /// Fields whose absence leaves placeholder text (or a silently dropped
    /// fragment) in the output.
    fn missing_fields(&self, config: &ClauseConfig) -> Vec<&'static str>;

    fn completeness(&self, config: &ClauseConfig) -> Completeness {
        Completeness {
            clause: self.id(),
            missing: self.missing_fields(config),
        }
    }
}

/// Validation signal kept apart from the preview text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completeness {
    pub clause: ClauseId,
    pub missing: Vec<&'static str>,
}

impl Completeness {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compose a single clause with the built-in templates.
pub fn compose_clause(id: ClauseId, config: &ClauseConfig) -> String {
    families::composer_for(id).compose(config)
}

/// Completeness of a single clause with the built-in templates.
pub fn is_complete(id: ClauseId, config: &ClauseConfig) -> bool {
    families::composer_for(id).completeness(config).is_complete()
}
