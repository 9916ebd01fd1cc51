//! Document generation request builder.
//!
//! The request is assembled here and handed to whatever HTTP client the
//! caller uses; nothing in this crate performs the network call.

use std::fmt;
use std::str::FromStr;

use lease_core::config::SubmissionConfig;
use lease_core::errors::SubmissionError;
use lease_core::FormType;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::payload::session_payload;
use crate::session::FormSession;

/// Output format accepted by the document backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = SubmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(SubmissionError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Everything needed to save a form and download its generated document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRequest {
    pub form_type: FormType,
    pub format: DocumentFormat,
    /// `POST` target that renders the document.
    pub endpoint: String,
    /// `POST` target that stores the raw form data.
    pub save_endpoint: String,
    /// Suggested download name, e.g. `deed-document.pdf`.
    pub file_name: String,
    /// MIME type of the downloaded file.
    pub content_type: &'static str,
    pub body: Map<String, Value>,
}

pub fn document_endpoint(base: &str, form_type: FormType, format: DocumentFormat) -> String {
    format!("{base}/generate-doc/{form_type}?format={format}")
}

pub fn save_endpoint(base: &str, form_type: FormType) -> String {
    format!("{base}/forms?type={form_type}")
}

pub fn file_name(form_type: FormType, format: DocumentFormat) -> String {
    format!("{form_type}-document.{format}")
}

/// Build the request for `session`.
///
/// `format` falls back to the configured default. Empty forms are always
/// rejected; forms with unresolved clause fields are rejected when
/// `require_complete` is on.
pub fn build_document_request(
    session: &FormSession,
    format: Option<DocumentFormat>,
    config: &SubmissionConfig,
) -> Result<DocumentRequest, SubmissionError> {
    let format = match format {
        Some(format) => format,
        None => config.effective_default_format().parse()?,
    };

    if session.input_fields().is_empty() {
        tracing::warn!(form = %session.form_type(), "submission rejected: form is empty");
        return Err(SubmissionError::EmptyForm);
    }

    if config.effective_require_complete() {
        let missing: Vec<String> = session
            .completeness()
            .into_iter()
            .flat_map(|c| {
                let clause = c.clause;
                c.missing.into_iter().map(move |field| format!("{clause}.{field}"))
            })
            .collect();
        if !missing.is_empty() {
            tracing::warn!(
                form = %session.form_type(),
                unresolved = missing.len(),
                "submission rejected: form is incomplete"
            );
            return Err(SubmissionError::Incomplete { missing });
        }
    }

    let base = config.effective_api_base_url();
    let form_type = session.form_type();
    let request = DocumentRequest {
        form_type,
        format,
        endpoint: document_endpoint(&base, form_type, format),
        save_endpoint: save_endpoint(&base, form_type),
        file_name: file_name(form_type, format),
        content_type: format.content_type(),
        body: session_payload(session)?,
    };
    tracing::info!(
        form = %form_type,
        format = %format,
        endpoint = %request.endpoint,
        fields = request.body.len(),
        "document request built"
    );
    Ok(request)
}
