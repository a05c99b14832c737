//! Chat conversations and their local history.

pub mod aggregate;
pub mod dto;
pub mod history;

pub use aggregate::{ChatMessage, ChatRole, ChatSession};
pub use dto::{ChatTurnRequest, ChatTurnResponse};
pub use history::{ChatHistory, HISTORY_STORAGE_KEY};
