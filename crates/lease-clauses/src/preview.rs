//! Text half of the live preview panel.

use lease_core::ClauseConfig;
use serde::Serialize;

use crate::clause::ClauseId;
use crate::composer::Completeness;
use crate::registry::ComposerRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub clause: ClauseId,
    pub heading: &'static str,
    pub text: String,
    pub completeness: Completeness,
}

impl PreviewSection {
    /// Toggle-gated clauses compose to nothing while switched off.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Preview every built-in clause in document order.
pub fn preview(config: &ClauseConfig) -> Vec<PreviewSection> {
    preview_with(&ComposerRegistry::builtin(), config)
}

pub fn preview_with(registry: &ComposerRegistry, config: &ClauseConfig) -> Vec<PreviewSection> {
    registry
        .ids()
        .filter_map(|id| registry.get(id))
        .map(|composer| PreviewSection {
            clause: composer.id(),
            heading: composer.id().heading(),
            text: composer.compose(config),
            completeness: composer.completeness(config),
        })
        .collect()
}

/// Plain-text rendering: heading, blank line, clause text. Empty clauses
/// are skipped.
pub fn render_plain(sections: &[PreviewSection]) -> String {
    sections
        .iter()
        .filter(|section| !section.is_empty())
        .map(|section| format!("{}\n\n{}", section.heading, section.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_in_document_order() {
        let sections = preview(&ClauseConfig::new());
        assert_eq!(sections.len(), 9);
        assert_eq!(sections[0].heading, "CLAUSE 20.1 - TERMINATION BY LESSOR");
        assert_eq!(sections[8].heading, "CLAUSE 7.3 - TRANSFER ON SALE");
    }

    #[test]
    fn plain_rendering_skips_disabled_clauses() {
        let text = render_plain(&preview(&ClauseConfig::new()));
        assert!(!text.contains("CLAUSE 4.4"));
        assert!(!text.contains("CLAUSE 7.3"));
        assert!(text.starts_with("CLAUSE 20.1 - TERMINATION BY LESSOR\n\n[Select termination type]"));
    }
}
