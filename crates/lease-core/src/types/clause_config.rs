//! The flat field map behind one form session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::ClauseValue;

/// Flat mapping from field name to value for one form session.
///
/// Holds both user inputs and the derived clause text written back by the
/// session. Reads never fail: every accessor treats an absent field the same
/// as an unset one, so composers can fall back to placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<ClauseValue>>")]
#[serde(into = "BTreeMap<String, ClauseValue>")]
pub struct ClauseConfig {
    fields: BTreeMap<String, ClauseValue>,
}

impl ClauseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ClauseValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Store a value, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ClauseValue>) -> Option<ClauseValue> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<ClauseValue> {
        self.fields.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ClauseValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClauseValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Whether the field holds a filled-in value (see [`ClauseValue::is_set`]).
    pub fn is_set(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(ClauseValue::is_set)
    }

    /// Boolean toggle read. Any filled-in value enables the toggle.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.is_set(key)
    }

    /// Rendered parameter value, or `None` when unset.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .filter(|v| v.is_set())
            .map(ClauseValue::render)
    }

    /// Rendered parameter value, or `fallback` when unset.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        self.text(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Raw text of a select field. Non-text values never match a variant tag.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(ClauseValue::as_text)
            .filter(|s| !s.is_empty())
    }

    /// Items of a checkbox-group field in insertion order; empty when unset.
    pub fn list(&self, key: &str) -> &[String] {
        self.fields
            .get(key)
            .and_then(ClauseValue::as_list)
            .unwrap_or(&[])
    }
}

impl From<BTreeMap<String, Option<ClauseValue>>> for ClauseConfig {
    /// JSON `null` entries are dropped; they read the same as absent fields.
    fn from(raw: BTreeMap<String, Option<ClauseValue>>) -> Self {
        Self {
            fields: raw.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect(),
        }
    }
}

impl From<ClauseConfig> for BTreeMap<String, ClauseValue> {
    fn from(config: ClauseConfig) -> Self {
        config.fields
    }
}

impl<K: Into<String>, V: Into<ClauseValue>> FromIterator<(K, V)> for ClauseConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_unset_fields_fall_back() {
        let config = ClauseConfig::new().with("days", "").with("count", 0);
        assert_eq!(config.text_or("days", "___"), "___");
        assert_eq!(config.text_or("count", "2"), "2");
        assert_eq!(config.text_or("missing", "30"), "30");
    }

    #[test]
    fn tag_ignores_non_text_values() {
        let config = ClauseConfig::new().with("type", true).with("other", "standard");
        assert_eq!(config.tag("type"), None);
        assert_eq!(config.tag("other"), Some("standard"));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let config = ClauseConfig::new().with("items", ["B", "A"]);
        assert_eq!(config.list("items"), ["B", "A"]);
        assert!(config.list("absent").is_empty());
    }

    #[test]
    fn json_nulls_are_dropped() {
        let config: ClauseConfig =
            serde_json::from_str(r#"{"a": null, "b": "x", "c": 3, "d": false}"#).unwrap();
        assert!(!config.contains("a"));
        assert_eq!(config.text("b").as_deref(), Some("x"));
        assert_eq!(config.text("c").as_deref(), Some("3"));
        assert!(!config.is_enabled("d"));
    }
}
