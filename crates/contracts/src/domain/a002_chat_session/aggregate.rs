use crate::shared::text::truncate_chars;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_CHARS: usize = 30;
pub const UNTITLED: &str = "Sohbet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn css_class(&self) -> &'static str {
        match self {
            ChatRole::User => "message user",
            ChatRole::Assistant => "message assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub role: ChatRole,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: ChatRole::User,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: ChatRole::Assistant,
        }
    }
}

/// One conversation as stored in the local history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Server-assigned conversation id.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Unix time of the last save, in milliseconds.
    pub timestamp: i64,
}

impl ChatSession {
    pub fn from_messages(id: impl Into<String>, messages: Vec<ChatMessage>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            title: derive_title(&messages),
            messages,
            timestamp,
        }
    }
}

/// First 30 characters of the opening message followed by `...`.
pub fn derive_title(messages: &[ChatMessage]) -> String {
    match messages.first() {
        Some(first) => {
            let (head, _) = truncate_chars(&first.content, TITLE_MAX_CHARS);
            format!("{}...", head)
        }
        None => UNTITLED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_first_message() {
        let msgs = vec![
            ChatMessage::user("Kira sözleşmesi feshi prosedürü nedir ve ne kadar sürer?"),
            ChatMessage::assistant("..."),
        ];
        assert_eq!(derive_title(&msgs), "Kira sözleşmesi feshi prosedür...");
        assert_eq!(derive_title(&[]), UNTITLED);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("x")).unwrap();
        assert_eq!(json, r#"{"content":"x","role":"assistant"}"#);
    }
}
