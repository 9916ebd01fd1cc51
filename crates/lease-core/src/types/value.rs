//! Scalar, boolean, and list values held by a [`ClauseConfig`](super::clause_config::ClauseConfig).

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A single form field value.
///
/// Serialized untagged so a config round-trips as a flat JSON object
/// (`{"terminationNoticeDays": 15, "enableEarlyTermination": true}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClauseValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl ClauseValue {
    /// Whether the value counts as filled in.
    ///
    /// Empty text, `0`, `false`, and empty lists all read as unset, so a
    /// cleared input falls back to its placeholder exactly like a missing one.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Borrow the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the items, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Render for substitution into clause prose.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClauseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl Serialize for ClauseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(b) => serializer.serialize_bool(*b),
            Self::Number(n) if is_whole(*n) => serializer.serialize_i64(*n as i64),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15
}

/// Whole numbers print without a fractional part: `15`, not `15.0`.
fn format_number(n: f64) -> String {
    if is_whole(n) {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for ClauseValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for ClauseValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for ClauseValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for ClauseValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClauseValue {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(ClauseValue::from(15).render(), "15");
        assert_eq!(ClauseValue::from(2.5).render(), "2.5");
    }

    #[test]
    fn cleared_inputs_read_as_unset() {
        assert!(!ClauseValue::from("").is_set());
        assert!(!ClauseValue::from(0).is_set());
        assert!(!ClauseValue::from(false).is_set());
        assert!(!ClauseValue::List(vec![]).is_set());
        assert!(ClauseValue::from("7").is_set());
    }

    #[test]
    fn untagged_json_shapes() {
        let v: ClauseValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, ClauseValue::Flag(true));
        let v: ClauseValue = serde_json::from_str("30").unwrap();
        assert_eq!(v, ClauseValue::Number(30.0));
        let v: ClauseValue = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(v, ClauseValue::Text("30".into()));
        let v: ClauseValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(v, ClauseValue::from(["a", "b"]));
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&ClauseValue::from(15)).unwrap(), "15");
        assert_eq!(serde_json::to_string(&ClauseValue::from(2.5)).unwrap(), "2.5");
    }
}
