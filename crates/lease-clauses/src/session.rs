//! Form session: one editable config per lease form with derived clause
//! text kept current after every mutation.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lease_core::config::{ComposerConfig, DraftConfig};
use lease_core::errors::{DraftError, SessionError};
use lease_core::{ClauseConfig, ClauseValue, FormType};

use crate::clause::{is_output_key, ClauseId};
use crate::composer::Completeness;
use crate::registry::ComposerRegistry;

/// Editable state of one lease form.
///
/// Input fields are written through [`FormSession::set_field`]; clause text
/// lives under each clause's canonical output key and is only ever written
/// by the session itself.
pub struct FormSession {
    form_type: FormType,
    config: ClauseConfig,
    registry: Arc<ComposerRegistry>,
    options: ComposerConfig,
    touched: BTreeSet<String>,
    dirty: bool,
}

impl FormSession {
    /// Empty session with the built-in composers.
    pub fn new(form_type: FormType) -> Self {
        Self::with_config(form_type, ClauseConfig::new())
    }

    /// Session seeded from existing input fields. Every clause is composed
    /// once up front; output keys in `config` are discarded.
    pub fn with_config(form_type: FormType, config: ClauseConfig) -> Self {
        Self::build(
            form_type,
            config,
            Arc::new(ComposerRegistry::builtin()),
            ComposerConfig::default(),
        )
    }

    /// Session using a caller-supplied registry and composer options.
    pub fn with_registry(
        form_type: FormType,
        config: ClauseConfig,
        registry: Arc<ComposerRegistry>,
        options: ComposerConfig,
    ) -> Self {
        Self::build(form_type, config, registry, options)
    }

    fn build(
        form_type: FormType,
        config: ClauseConfig,
        registry: Arc<ComposerRegistry>,
        options: ComposerConfig,
    ) -> Self {
        let config = config
            .iter()
            .filter(|(key, _)| !is_output_key(key))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        let mut session = Self {
            form_type,
            config,
            registry,
            options,
            touched: BTreeSet::new(),
            dirty: false,
        };
        session.recompute_all();
        session
    }

    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    /// Full config: input fields plus derived clause text.
    pub fn config(&self) -> &ClauseConfig {
        &self.config
    }

    pub fn options(&self) -> &ComposerConfig {
        &self.options
    }

    pub fn registry(&self) -> &ComposerRegistry {
        &self.registry
    }

    /// Input fields only, as persisted in drafts.
    pub fn input_fields(&self) -> ClauseConfig {
        self.config
            .iter()
            .filter(|(key, _)| !is_output_key(key))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Write one input field and recompute the clauses that read it.
    ///
    /// Returns the recomputed clause ids. Writing a value equal to the current
    /// one recomputes nothing.
    pub fn set_field(
        &mut self,
        key: &str,
        value: impl Into<ClauseValue>,
    ) -> Result<Vec<ClauseId>, SessionError> {
        self.guard_input(key)?;
        let value = value.into();
        if self.config.get(key) == Some(&value) {
            return Ok(Vec::new());
        }
        self.config.set(key, value);
        Ok(self.after_change(key))
    }

    /// Remove one input field and recompute the clauses that read it.
    pub fn clear_field(&mut self, key: &str) -> Result<Vec<ClauseId>, SessionError> {
        self.guard_input(key)?;
        if self.config.remove(key).is_none() {
            return Ok(Vec::new());
        }
        Ok(self.after_change(key))
    }

    /// Checkbox semantics for list fields: a checked item is appended when
    /// absent, an unchecked item is removed. Existing order is kept.
    pub fn set_list_item(
        &mut self,
        field: &str,
        item: &str,
        checked: bool,
    ) -> Result<Vec<ClauseId>, SessionError> {
        self.guard_input(field)?;
        let current = self.config.list(field);
        let present = current.iter().any(|existing| existing == item);
        let next: Vec<String> = match (checked, present) {
            (true, false) => current
                .iter()
                .cloned()
                .chain(std::iter::once(item.to_string()))
                .collect(),
            (false, true) => current
                .iter()
                .filter(|existing| existing.as_str() != item)
                .cloned()
                .collect(),
            _ => return Ok(Vec::new()),
        };
        if next.is_empty() {
            self.config.remove(field);
        } else {
            self.config.set(field, next);
        }
        Ok(self.after_change(field))
    }

    fn guard_input(&self, key: &str) -> Result<(), SessionError> {
        if is_output_key(key) {
            tracing::warn!(field = key, form = %self.form_type, "rejected write to derived clause field");
            return Err(SessionError::DerivedField {
                field: key.to_string(),
            });
        }
        Ok(())
    }

    fn after_change(&mut self, key: &str) -> Vec<ClauseId> {
        self.touched.insert(key.to_string());
        self.dirty = true;
        let ids: Vec<ClauseId> = if self.options.effective_recompute_all() {
            self.registry.ids().collect()
        } else {
            self.registry.dependents_of(key).to_vec()
        };
        self.recompute(&ids);
        tracing::debug!(field = key, recomputed = ids.len(), "clause text recomputed");
        ids
    }

    fn recompute(&mut self, ids: &[ClauseId]) {
        for &id in ids {
            let text = self.registry.compose(id, &self.config);
            self.config.set(id.output_key(), text);
        }
    }

    fn recompute_all(&mut self) {
        let ids: Vec<ClauseId> = self.registry.ids().collect();
        self.recompute(&ids);
    }

    /// Current text of one clause; empty when the clause is not registered.
    pub fn clause_text(&self, id: ClauseId) -> &str {
        self.config
            .get(id.output_key())
            .and_then(ClauseValue::as_text)
            .unwrap_or("")
    }

    pub fn completeness(&self) -> Vec<Completeness> {
        self.registry.completeness_all(&self.config)
    }

    pub fn is_complete(&self) -> bool {
        self.completeness().iter().all(Completeness::is_complete)
    }

    /// Unsaved changes since creation, the last reset, or the last save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Input fields written during this session.
    pub fn touched(&self) -> impl Iterator<Item = &str> {
        self.touched.iter().map(String::as_str)
    }

    pub fn is_touched(&self, key: &str) -> bool {
        self.touched.contains(key)
    }

    /// Drop every input and return to the freshly created state.
    pub fn reset(&mut self) {
        self.config.clear();
        self.touched.clear();
        self.dirty = false;
        self.recompute_all();
        tracing::debug!(form = %self.form_type, "session reset");
    }

    /// Write the input fields to `path` as a JSON object.
    pub fn save_draft(&mut self, path: &Path) -> Result<(), SessionError> {
        self.write_draft(path, true)
    }

    /// Write the draft to its configured location and return the path.
    pub fn save_to(&mut self, drafts: &DraftConfig) -> Result<PathBuf, SessionError> {
        let path = drafts.draft_path(self.form_type);
        self.write_draft(&path, drafts.effective_pretty())?;
        Ok(path)
    }

    fn write_draft(&mut self, path: &Path, pretty: bool) -> Result<(), SessionError> {
        let inputs = self.input_fields();
        let json = if pretty {
            serde_json::to_string_pretty(&inputs)
        } else {
            serde_json::to_string(&inputs)
        }
        .map_err(|e| DraftError::Malformed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| DraftError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| DraftError::Io {
            path: path.display().to_string(),
            source,
        })?;

        self.dirty = false;
        tracing::info!(path = %path.display(), form = %self.form_type, fields = inputs.len(), "draft saved");
        Ok(())
    }

    /// Restore a session from a draft written by [`FormSession::save_draft`].
    /// Clause text is recomputed rather than trusted from the file.
    pub fn load_draft(form_type: FormType, path: &Path) -> Result<Self, SessionError> {
        let shown = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| DraftError::Io {
            path: shown.clone(),
            source,
        })?;
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| DraftError::Malformed {
                path: shown.clone(),
                message: e.to_string(),
            })?;
        if !value.is_object() {
            return Err(DraftError::NotAnObject { path: shown }.into());
        }
        let config: ClauseConfig =
            serde_json::from_value(value).map_err(|e| DraftError::Malformed {
                path: shown.clone(),
                message: e.to_string(),
            })?;

        let session = Self::with_config(form_type, config);
        tracing::info!(path = %shown, form = %form_type, "draft loaded");
        Ok(session)
    }

    /// Load the draft from its configured location.
    pub fn load_from(form_type: FormType, drafts: &DraftConfig) -> Result<Self, SessionError> {
        Self::load_draft(form_type, &drafts.draft_path(form_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_loads_back_with_recomputed_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deed.json");
        let mut session = FormSession::new(FormType::Deed);
        session.set_field("terminationNoticeDays", 45).unwrap();
        session.save_draft(&path).unwrap();

        let loaded = FormSession::load_draft(FormType::Deed, &path).unwrap();
        assert_eq!(loaded.input_fields(), session.input_fields());
        assert_eq!(
            loaded.clause_text(ClauseId::TerminationByLessor),
            session.clause_text(ClauseId::TerminationByLessor)
        );
        assert!(!loaded.is_dirty());
    }

    #[test]
    fn new_session_has_placeholder_text() {
        let session = FormSession::new(FormType::Deed);
        assert_eq!(
            session.clause_text(ClauseId::TerminationByLessor),
            "[Select termination type]"
        );
        assert_eq!(session.clause_text(ClauseId::DefaultRemedy), "");
        assert!(!session.is_dirty());
    }

    #[test]
    fn unchanged_value_recomputes_nothing() {
        let mut session = FormSession::new(FormType::Deed);
        session.set_field("terminationNoticeDays", 15).unwrap();
        let ids = session.set_field("terminationNoticeDays", 15).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn recompute_all_option() {
        let options = ComposerConfig {
            recompute_all: Some(true),
            ..ComposerConfig::default()
        };
        let mut session = FormSession::with_registry(
            FormType::Deed,
            ClauseConfig::new(),
            Arc::new(ComposerRegistry::builtin()),
            options,
        );
        let ids = session.set_field("terminationNoticeDays", 15).unwrap();
        assert_eq!(ids.len(), ClauseId::ALL.len());
    }

    #[test]
    fn with_config_drops_stale_clause_text() {
        let config = ClauseConfig::new()
            .with("clause30", "stale text")
            .with("counterpartsClauseType", "standard_two");
        let session = FormSession::with_config(FormType::Deed, config);
        assert!(!session.config().contains("clause30"));
        assert!(session
            .clause_text(ClauseId::Counterparts)
            .starts_with("This Lease Deed may be executed in two or more counterparts"));
    }
}
