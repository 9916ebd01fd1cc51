//! Flat JSON payload sent to the document backend.

use lease_core::config::ComposerConfig;
use lease_core::errors::SubmissionError;
use lease_core::ClauseConfig;
use serde_json::{Map, Value};

use crate::clause::ClauseId;
use crate::session::FormSession;

/// Serialize `config` into one flat JSON object.
///
/// Clause text is stored under its canonical key only. When legacy aliases
/// are enabled, each canonical key present is copied to its legacy key so
/// older backend templates keep resolving.
pub fn to_payload(
    config: &ClauseConfig,
    options: &ComposerConfig,
) -> Result<Map<String, Value>, SubmissionError> {
    let value = serde_json::to_value(config).map_err(|e| SubmissionError::Serialize {
        message: e.to_string(),
    })?;
    let Value::Object(mut object) = value else {
        return Err(SubmissionError::Serialize {
            message: "form config did not serialize to an object".to_string(),
        });
    };

    if options.effective_emit_legacy_aliases() {
        for id in ClauseId::ALL {
            if let Some(text) = object.get(id.output_key()).cloned() {
                object.insert(id.legacy_key().to_string(), text);
            }
        }
    }

    Ok(object)
}

/// Payload for a session, using the session's own composer options.
pub fn session_payload(session: &FormSession) -> Result<Map<String, Value>, SubmissionError> {
    to_payload(session.config(), session.options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_omitted_when_disabled() {
        let config = ClauseConfig::new().with("counterpartsClause30", "Text.");
        let options = ComposerConfig {
            emit_legacy_aliases: Some(false),
            ..ComposerConfig::default()
        };
        let payload = to_payload(&config, &options).unwrap();
        assert!(payload.contains_key("counterpartsClause30"));
        assert!(!payload.contains_key("clause30"));
    }

    #[test]
    fn default_clause_text_reaches_legacy_keys() {
        let config = ClauseConfig::new()
            .with("defaultClause43", "Penalty.")
            .with("defaultClause44", "Remedy.");
        let payload = to_payload(&config, &ComposerConfig::default()).unwrap();
        assert_eq!(payload["clause43"], Value::String("Penalty.".to_string()));
        assert_eq!(payload["clause44"], Value::String("Remedy.".to_string()));
        assert_eq!(payload["defaultClause43"], payload["clause43"]);
    }

    #[test]
    fn inputs_pass_through_unchanged() {
        let config = ClauseConfig::new()
            .with("terminationNoticeDays", 15)
            .with("enableEarlyTermination", true);
        let payload = to_payload(&config, &ComposerConfig::default()).unwrap();
        assert_eq!(payload["terminationNoticeDays"], serde_json::json!(15));
        assert_eq!(payload["enableEarlyTermination"], Value::Bool(true));
    }
}
