//! Slot substitution for clause templates.
//!
//! Templates are `&'static str` with `{slot}` markers. Each slot is bound to a
//! config field and a fallback through a [`Param`]. Substitution is a single
//! pass, so text typed by the user is never rescanned for slots.

use lease_core::ClauseConfig;

/// Blank run used where the form has no sensible default.
pub const BLANK: &str = "___";

/// Binds a template slot to the config field that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub slot: &'static str,
    pub field: &'static str,
    pub fallback: &'static str,
}

impl Param {
    pub const fn new(slot: &'static str, field: &'static str, fallback: &'static str) -> Self {
        Self { slot, field, fallback }
    }

    /// A param is required when its fallback is a gap marker rather than a
    /// real default like `"30"`.
    pub fn is_required(&self) -> bool {
        self.fallback == BLANK || self.fallback.starts_with('[')
    }
}

/// A closed set of select-field options.
pub trait VariantTag: Copy + Sized + 'static {
    const ALL: &'static [Self];

    /// The option value stored in the config.
    fn tag(self) -> &'static str;

    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.tag() == tag)
    }

    /// Read the selected option; absent or unrecognized values yield `None`.
    fn read(config: &ClauseConfig, field: &str) -> Option<Self> {
        config.tag(field).and_then(Self::from_tag)
    }

    fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.tag()).collect()
    }
}

/// Replace every `{slot}` using `lookup`. Unknown slots are left as written.
pub fn fill(template: &str, mut lookup: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let slot = &after[..close];
                match lookup(slot) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(slot);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Fill a template from config fields, falling back per param.
pub fn render(template: &str, params: &[Param], config: &ClauseConfig) -> String {
    fill(template, |slot| {
        params
            .iter()
            .find(|p| p.slot == slot)
            .map(|p| config.text_or(p.field, p.fallback))
    })
}

/// Slot names referenced by a template, in order of appearance.
pub fn slots(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else { break };
        found.push(&after[..close]);
        rest = &after[close + 1..];
    }
    found
}

/// Required fields used by `template` that are still unset.
pub fn missing(template: &str, params: &[Param], config: &ClauseConfig) -> Vec<&'static str> {
    let mut out = Vec::new();
    for slot in slots(template) {
        if let Some(p) = params.iter().find(|p| p.slot == slot) {
            if p.is_required() && !config.is_set(p.field) && !out.contains(&p.field) {
                out.push(p.field);
            }
        }
    }
    out
}
