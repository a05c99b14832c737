use serde::{Deserialize, Serialize};

/// Sent as `user_id` when no identity is known.
pub const ANONYMOUS_USER: &str = "anonymous";

pub const GENERIC_ERROR: &str = "Bilinmeyen bir hata oluştu.";
pub const UNREACHABLE_MESSAGE: &str =
    "⚠️ Sunucuya bağlanılamadı. (Sunucu uyku modunda olabilir, lütfen 30 saniye bekleyip tekrar deneyin)";

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnRequest {
    pub message: String,
    pub conversation_id: Option<String>,
    pub user_id: String,
}

impl ChatTurnRequest {
    pub fn anonymous(message: impl Into<String>, conversation_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            conversation_id,
            user_id: ANONYMOUS_USER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnResponse {
    pub response: String,
    pub conversation_id: String,
}

/// Assistant text for a non-OK chat response.
pub fn error_reply(detail: Option<&str>) -> String {
    let detail = detail
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(GENERIC_ERROR);
    format!("Hata: {}", detail)
}

/// Trimmed text to send for a turn. Blank input, or input typed while the
/// previous turn is still awaiting its reply, sends nothing.
pub fn outgoing_message(input: &str, in_flight: bool) -> Option<String> {
    let text = input.trim();
    if text.is_empty() || in_flight {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let req = ChatTurnRequest::anonymous("Merhaba", None);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["user_id"], "anonymous");
        assert!(json["conversation_id"].is_null());
    }

    #[test]
    fn test_error_reply() {
        assert_eq!(error_reply(Some("Limit aşıldı")), "Hata: Limit aşıldı");
        assert_eq!(error_reply(None), "Hata: Bilinmeyen bir hata oluştu.");
        assert_eq!(error_reply(Some("  ")), "Hata: Bilinmeyen bir hata oluştu.");
    }

    #[test]
    fn test_outgoing_message() {
        assert_eq!(outgoing_message("  Merhaba \n", false), Some("Merhaba".to_string()));
        assert_eq!(outgoing_message("   ", false), None);
        assert_eq!(outgoing_message("", false), None);
        assert_eq!(outgoing_message("Merhaba", true), None);
    }
}
