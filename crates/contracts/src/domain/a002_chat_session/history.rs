//! Bounded, most-recent-first list of past conversations.

use super::aggregate::ChatSession;
use serde::{Deserialize, Serialize};

/// Browser local-storage key holding the serialized history.
pub const HISTORY_STORAGE_KEY: &str = "justlaw_chat_history";
pub const MAX_SESSIONS: usize = 10;
/// Number of sessions listed in the sidebar.
pub const SIDEBAR_SESSIONS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
    sessions: Vec<ChatSession>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the stored value. Missing or corrupt data reads as empty.
    pub fn from_json(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the session with the same id in place, or insert it at the
    /// front. The list is cut to `MAX_SESSIONS` afterwards.
    pub fn upsert(&mut self, session: ChatSession) {
        match self.sessions.iter().position(|s| s.id == session.id) {
            Some(idx) => self.sessions[idx] = session,
            None => self.sessions.insert(0, session),
        }
        self.sessions.truncate(MAX_SESSIONS);
    }

    pub fn find(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Up to `n` sessions from the front of the list.
    pub fn recent(&self, n: usize) -> &[ChatSession] {
        &self.sessions[..n.min(self.sessions.len())]
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_chat_session::ChatMessage;

    fn session(id: usize) -> ChatSession {
        ChatSession::from_messages(
            format!("conv-{}", id),
            vec![ChatMessage::user(format!("soru {}", id))],
            id as i64,
        )
    }

    #[test]
    fn test_eleven_writes_keep_ten_most_recent() {
        let mut history = ChatHistory::new();
        for i in 0..11 {
            history.upsert(session(i));
        }
        assert_eq!(history.len(), MAX_SESSIONS);
        let ids: Vec<_> = history.sessions().iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<String> = (1..11).rev().map(|i| format!("conv-{}", i)).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(history.find("conv-0").is_none());
    }

    #[test]
    fn test_existing_id_replaced_in_place() {
        let mut history = ChatHistory::new();
        history.upsert(session(1));
        history.upsert(session(2));

        let mut updated = session(1);
        updated.messages.push(ChatMessage::assistant("cevap"));
        history.upsert(updated);

        assert_eq!(history.len(), 2);
        assert_eq!(history.sessions()[1].id, "conv-1");
        assert_eq!(history.sessions()[1].messages.len(), 2);
    }

    #[test]
    fn test_corrupt_json_reads_empty() {
        assert!(ChatHistory::from_json(Some("{not json")).is_empty());
        assert!(ChatHistory::from_json(None).is_empty());
    }

    #[test]
    fn test_json_is_plain_array() {
        let mut history = ChatHistory::new();
        history.upsert(session(3));
        let raw = history.to_json();
        assert!(raw.starts_with('['));
        assert_eq!(ChatHistory::from_json(Some(&raw)), history);
    }

    #[test]
    fn test_recent_is_bounded() {
        let mut history = ChatHistory::new();
        for i in 0..3 {
            history.upsert(session(i));
        }
        assert_eq!(history.recent(SIDEBAR_SESSIONS).len(), 3);
        assert_eq!(history.recent(2)[0].id, "conv-2");
    }
}
