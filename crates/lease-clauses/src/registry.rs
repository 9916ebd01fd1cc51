//! Composer registry with a field → dependent-clauses index.

use lease_core::{ClauseConfig, FxHashMap};
use smallvec::SmallVec;

use crate::clause::ClauseId;
use crate::composer::{ClauseComposer, Completeness};
use crate::families;

/// Clauses affected by one field. Most fields feed a single clause.
pub type Dependents = SmallVec<[ClauseId; 2]>;

/// Holds one composer per clause, in document order.
///
/// Immutable once built; share it behind a reference or an `Arc`.
pub struct ComposerRegistry {
    composers: Vec<Box<dyn ClauseComposer>>,
    dependents: FxHashMap<&'static str, Dependents>,
}

impl ComposerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            composers: Vec::new(),
            dependents: FxHashMap::default(),
        }
    }

    /// Registry with every built-in clause.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for composer in families::builtin() {
            registry.register(composer);
        }
        registry
    }

    /// Register a composer. A composer for an already registered clause
    /// replaces it in place.
    pub fn register(&mut self, composer: Box<dyn ClauseComposer>) {
        let id = composer.id();
        match self.composers.iter().position(|c| c.id() == id) {
            Some(index) => self.composers[index] = composer,
            None => self.composers.push(composer),
        }
        self.reindex();
    }

    fn reindex(&mut self) {
        self.dependents.clear();
        for composer in &self.composers {
            for &field in composer.dependencies() {
                let entry = self.dependents.entry(field).or_default();
                if !entry.contains(&composer.id()) {
                    entry.push(composer.id());
                }
            }
        }
    }

    pub fn get(&self, id: ClauseId) -> Option<&dyn ClauseComposer> {
        self.composers
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Compose one clause. Unregistered clauses compose to an empty string.
    pub fn compose(&self, id: ClauseId, config: &ClauseConfig) -> String {
        self.get(id)
            .map(|composer| composer.compose(config))
            .unwrap_or_default()
    }

    /// Compose every registered clause.
    pub fn compose_all(&self, config: &ClauseConfig) -> Vec<(ClauseId, String)> {
        self.composers
            .iter()
            .map(|c| (c.id(), c.compose(config)))
            .collect()
    }

    pub fn completeness_all(&self, config: &ClauseConfig) -> Vec<Completeness> {
        self.composers.iter().map(|c| c.completeness(config)).collect()
    }

    /// Clauses whose text can change when `field` changes.
    pub fn dependents_of(&self, field: &str) -> &[ClauseId] {
        self.dependents
            .get(field)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Registered clause ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = ClauseId> + '_ {
        self.composers.iter().map(|c| c.id())
    }

    pub fn count(&self) -> usize {
        self.composers.len()
    }
}

impl Default for ComposerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl ClauseComposer for Fixed {
        fn id(&self) -> ClauseId {
            ClauseId::Counterparts
        }

        fn dependencies(&self) -> &'static [&'static str] {
            &["copies"]
        }

        fn compose(&self, _config: &ClauseConfig) -> String {
            "Executed in a single original.".to_string()
        }

        fn missing_fields(&self, _config: &ClauseConfig) -> Vec<&'static str> {
            Vec::new()
        }
    }

    #[test]
    fn builtin_covers_every_clause() {
        let registry = ComposerRegistry::builtin();
        assert_eq!(registry.count(), ClauseId::ALL.len());
        assert!(registry.ids().eq(ClauseId::ALL.iter().copied()));
    }

    #[test]
    fn register_replaces_and_reindexes() {
        let mut registry = ComposerRegistry::builtin();
        registry.register(Box::new(Fixed));
        assert_eq!(registry.count(), ClauseId::ALL.len());
        assert_eq!(
            registry.compose(ClauseId::Counterparts, &ClauseConfig::new()),
            "Executed in a single original."
        );
        assert_eq!(registry.dependents_of("copies"), &[ClauseId::Counterparts]);
        assert!(registry.dependents_of("counterpartsClauseType").is_empty());
    }

    #[test]
    fn dependents_index_by_field() {
        let registry = ComposerRegistry::builtin();
        assert!(registry.dependents_of("unrelatedField").is_empty());
        assert_eq!(
            registry.dependents_of("terminationClauseType"),
            &[ClauseId::TerminationByLessor]
        );
    }
}
