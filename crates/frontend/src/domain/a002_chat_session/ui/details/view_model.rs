//! Chat - View Model
//!
//! Provided once at the app root so the conversation survives section
//! switches and can be restored from the sidebar history.

use contracts::domain::a002_chat_session::{ChatMessage, ChatSession};
use leptos::prelude::*;
use uuid::Uuid;

/// A rendered message. Transient entries (error notices) are shown but never
/// written to the history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub key: Uuid,
    pub message: ChatMessage,
    pub transient: bool,
}

impl ChatEntry {
    pub fn new(message: ChatMessage) -> Self {
        Self {
            key: Uuid::new_v4(),
            message,
            transient: false,
        }
    }

    pub fn notice(message: ChatMessage) -> Self {
        Self {
            transient: true,
            ..Self::new(message)
        }
    }
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub entries: RwSignal<Vec<ChatEntry>>,
    pub conversation_id: RwSignal<Option<String>>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            conversation_id: RwSignal::new(None),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    pub fn push(&self, entry: ChatEntry) {
        self.entries.update(|list| list.push(entry));
    }

    /// Messages that belong in the stored session.
    pub fn persistent_messages(&self) -> Vec<ChatMessage> {
        self.entries.with_untracked(|list| {
            list.iter()
                .filter(|e| !e.transient)
                .map(|e| e.message.clone())
                .collect()
        })
    }

    /// Show a stored session. Refused while a turn is in flight, since the
    /// pending reply belongs to the current conversation.
    pub fn restore(&self, session: &ChatSession) -> bool {
        if self.is_sending.get_untracked() {
            return false;
        }
        self.conversation_id.set(Some(session.id.clone()));
        self.entries
            .set(session.messages.iter().cloned().map(ChatEntry::new).collect());
        self.input.set(String::new());
        true
    }

    /// Start an empty conversation. Refused while a turn is in flight.
    pub fn reset(&self) -> bool {
        if self.is_sending.get_untracked() {
            return false;
        }
        self.conversation_id.set(None);
        self.entries.set(Vec::new());
        self.input.set(String::new());
        true
    }
}

pub fn use_chat_vm() -> ChatVm {
    use_context::<ChatVm>().expect("ChatVm not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: &str) -> ChatSession {
        ChatSession::from_messages(
            id,
            vec![ChatMessage::user("Kira artışı"), ChatMessage::assistant("Yanıt")],
            1,
        )
    }

    #[test]
    fn test_restore_refused_while_sending() {
        let vm = ChatVm::new();
        vm.conversation_id.set(Some("a".to_string()));
        vm.push(ChatEntry::new(ChatMessage::user("İhbar tazminatı")));
        vm.is_sending.set(true);

        assert!(!vm.restore(&stored("b")));
        assert!(!vm.reset());
        assert_eq!(vm.conversation_id.get_untracked().as_deref(), Some("a"));
        assert_eq!(vm.persistent_messages(), vec![ChatMessage::user("İhbar tazminatı")]);

        vm.is_sending.set(false);
        assert!(vm.restore(&stored("b")));
        assert_eq!(vm.conversation_id.get_untracked().as_deref(), Some("b"));
        assert_eq!(vm.persistent_messages().len(), 2);
    }

    #[test]
    fn test_notices_not_persisted() {
        let vm = ChatVm::new();
        vm.push(ChatEntry::new(ChatMessage::user("Soru")));
        vm.push(ChatEntry::notice(ChatMessage::assistant("Hata: Limit")));
        assert_eq!(vm.persistent_messages(), vec![ChatMessage::user("Soru")]);
        assert!(vm.reset());
        assert!(vm.persistent_messages().is_empty());
    }
}
