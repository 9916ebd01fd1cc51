//! Clause composer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for clause composition and derived-field transport.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ComposerConfig {
    /// Copy each canonical clause key to its legacy alias in payloads. Default: true.
    pub emit_legacy_aliases: Option<bool>,
    /// Recompute every clause on each mutation instead of only dependents. Default: false.
    pub recompute_all: Option<bool>,
}

impl ComposerConfig {
    /// Returns whether legacy alias keys are written, defaulting to true.
    pub fn effective_emit_legacy_aliases(&self) -> bool {
        self.emit_legacy_aliases.unwrap_or(true)
    }

    /// Returns whether every mutation recomputes all clauses, defaulting to false.
    pub fn effective_recompute_all(&self) -> bool {
        self.recompute_all.unwrap_or(false)
    }
}
