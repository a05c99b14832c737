//! Uploaded contract analysis: client-side file checks and the response body.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 20 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "application/xml",
    "text/xml",
];

/// Value of the file input's `accept` attribute.
pub const ACCEPT_ATTR: &str = ".pdf,.docx,.txt,.udf";

pub const RESULT_FALLBACK: &str = "Analiz tamamlandı.";
pub const FAILURE_FALLBACK: &str = "Analiz başarısız";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    UnsupportedType,
    TooLarge { size: u64 },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::UnsupportedType => {
                write!(f, "Lütfen PDF, DOCX, TXT veya UDF dosyası yükleyin.")
            }
            UploadError::TooLarge { .. } => write!(f, "Dosya boyutu 20MB'dan büyük olamaz."),
        }
    }
}

impl std::error::Error for UploadError {}

/// UDF files are XML but browsers often report an empty or binary MIME type,
/// so the extension is checked as well.
pub fn is_accepted_type(name: &str, mime: &str) -> bool {
    let lower = name.to_lowercase();
    ACCEPTED_MIME_TYPES.contains(&mime) || name.ends_with(".txt") || lower.ends_with(".udf")
}

/// Type check first, then size. Rejected files never reach the network.
pub fn validate_upload(name: &str, mime: &str, size: u64) -> Result<(), UploadError> {
    if !is_accepted_type(name, mime) {
        return Err(UploadError::UnsupportedType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge { size });
    }
    Ok(())
}

/// Body of a successful `POST /api/sozlesme-analiz`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub analiz: Option<String>,
}

impl AnalysisResponse {
    /// Markdown to render; blank results fall back to a fixed notice.
    pub fn markdown(&self) -> &str {
        self.analiz
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(RESULT_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_types() {
        assert!(validate_upload("sozlesme.pdf", "application/pdf", 1024).is_ok());
        assert!(validate_upload("notlar.txt", "", 10).is_ok());
        assert!(validate_upload("DAVA.UDF", "application/octet-stream", 10).is_ok());
        assert!(validate_upload(
            "kira.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            10
        )
        .is_ok());
    }

    #[test]
    fn test_rejects_unsupported_type() {
        assert_eq!(
            validate_upload("foto.png", "image/png", 10),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_upload("a.pdf", "application/pdf", MAX_UPLOAD_BYTES).is_ok());
        let err = validate_upload("a.pdf", "application/pdf", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(err.to_string(), "Dosya boyutu 20MB'dan büyük olamaz.");
    }

    #[test]
    fn test_markdown_fallback() {
        assert_eq!(AnalysisResponse::default().markdown(), RESULT_FALLBACK);
        let raw = r###"{"analiz":"## Riskler"}"###;
        let resp: AnalysisResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.markdown(), "## Riskler");
    }
}
