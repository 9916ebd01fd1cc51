//! Payload and document request tests.

mod common;

use lease_clauses::payload::{session_payload, to_payload};
use lease_clauses::{build_document_request, ClauseId, DocumentFormat, FormSession};
use lease_core::config::{ComposerConfig, SubmissionConfig};
use lease_core::errors::SubmissionError;
use lease_core::{FormType, LeaseErrorCode};

use common::complete_deed;

fn lenient() -> SubmissionConfig {
    SubmissionConfig {
        require_complete: Some(false),
        ..SubmissionConfig::default()
    }
}

// ============================================================================
// Payload
// ============================================================================

#[test]
fn legacy_aliases_carry_identical_text() {
    let session = FormSession::with_config(FormType::Deed, complete_deed());
    let payload = session_payload(&session).unwrap();
    for id in ClauseId::ALL {
        let canonical = &payload[id.output_key()];
        assert_eq!(canonical, &payload[id.legacy_key()], "{id}");
        assert_eq!(canonical.as_str().unwrap(), session.clause_text(id));
    }
}

#[test]
fn payload_without_aliases() {
    let session = FormSession::with_config(FormType::Deed, complete_deed());
    let options = ComposerConfig {
        emit_legacy_aliases: Some(false),
        ..ComposerConfig::default()
    };
    let payload = to_payload(session.config(), &options).unwrap();
    assert!(ClauseId::ALL
        .iter()
        .all(|id| payload.contains_key(id.output_key()) && !payload.contains_key(id.legacy_key())));
}

#[test]
fn payload_numbers_stay_whole() {
    let session = FormSession::with_config(FormType::Deed, complete_deed());
    let payload = session_payload(&session).unwrap();
    assert_eq!(payload["terminationNoticeDays"], serde_json::json!(15));
    assert_eq!(payload["enableTransferClause"], serde_json::json!(true));
    assert_eq!(
        payload["deductionTypes"],
        serde_json::json!(["Outstanding rent arrears"])
    );
}

// ============================================================================
// Document request
// ============================================================================

#[test]
fn request_for_complete_deed() {
    let session = FormSession::with_config(FormType::Deed, complete_deed());
    let request =
        build_document_request(&session, None, &SubmissionConfig::default()).unwrap();
    assert_eq!(request.format, DocumentFormat::Pdf);
    assert_eq!(
        request.endpoint,
        "http://localhost:4000/api/generate-doc/deed?format=pdf"
    );
    assert_eq!(request.save_endpoint, "http://localhost:4000/api/forms?type=deed");
    assert_eq!(request.file_name, "deed-document.pdf");
    assert_eq!(request.content_type, "application/pdf");
    assert!(request.body.contains_key("clause201"));
}

#[test]
fn request_uses_configured_base_and_format() {
    let session = FormSession::with_config(FormType::Land, complete_deed());
    let config = SubmissionConfig {
        api_base_url: Some("https://docs.example.test/api/".to_string()),
        default_format: Some("docx".to_string()),
        require_complete: Some(true),
    };
    let request = build_document_request(&session, None, &config).unwrap();
    assert_eq!(
        request.endpoint,
        "https://docs.example.test/api/generate-doc/land?format=docx"
    );
    assert_eq!(request.file_name, "land-document.docx");
    assert_eq!(
        request.content_type,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );

    let explicit = build_document_request(&session, Some(DocumentFormat::Pdf), &config).unwrap();
    assert_eq!(explicit.file_name, "land-document.pdf");
}

#[test]
fn empty_form_is_rejected() {
    let session = FormSession::new(FormType::Residential);
    let err = build_document_request(&session, None, &lenient()).unwrap_err();
    assert!(matches!(err, SubmissionError::EmptyForm));
    assert_eq!(
        err.to_string(),
        "Form data is empty. Please fill the form before submitting."
    );
    assert_eq!(err.error_code(), "FORM_EMPTY");
}

#[test]
fn incomplete_form_is_rejected_when_required() {
    let mut session = FormSession::new(FormType::Deed);
    session.set_field("terminationClauseType", "standard").unwrap();

    let err = build_document_request(&session, None, &SubmissionConfig::default()).unwrap_err();
    match &err {
        SubmissionError::Incomplete { missing } => {
            assert!(missing.contains(&"termination_by_lessor.terminationNoticeDays".to_string()));
            assert!(missing.contains(&"right_to_mortgage.mortgageClauseType".to_string()));
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
    assert_eq!(err.error_code(), "FORM_INCOMPLETE");

    assert!(build_document_request(&session, None, &lenient()).is_ok());
}

#[test]
fn unknown_default_format_is_rejected() {
    let session = FormSession::with_config(FormType::Deed, complete_deed());
    let config = SubmissionConfig {
        default_format: Some("odt".to_string()),
        ..SubmissionConfig::default()
    };
    let err = build_document_request(&session, None, &config).unwrap_err();
    assert!(matches!(err, SubmissionError::UnknownFormat { ref value } if value == "odt"));
}
