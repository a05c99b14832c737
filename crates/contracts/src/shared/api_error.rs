use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses: `{"detail": "..."}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, tolerating empty or non-JSON payloads.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Detail text, or `fallback` when the server sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.detail.as_deref().map(str::trim) {
            Some(detail) if !detail.is_empty() => detail.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail() {
        let body = ApiErrorBody::parse(r#"{"detail":"Kota aşıldı"}"#);
        assert_eq!(body.message_or("Bilinmeyen hata"), "Kota aşıldı");
    }

    #[test]
    fn test_fallback_on_garbage() {
        let body = ApiErrorBody::parse("<html>502</html>");
        assert!(body.detail.is_none());
        assert_eq!(body.message_or("Sunucu hatası"), "Sunucu hatası");
    }

    #[test]
    fn test_blank_detail_uses_fallback() {
        let body = ApiErrorBody::parse(r#"{"detail":"  "}"#);
        assert_eq!(body.message_or("x"), "x");
    }
}
