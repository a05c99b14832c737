//! Chat - Model (API and history storage)

use crate::shared::api_utils::api_url;
use crate::shared::storage;
use contracts::domain::a002_chat_session::dto::error_reply;
use contracts::domain::a002_chat_session::{
    ChatHistory, ChatSession, ChatTurnRequest, ChatTurnResponse, HISTORY_STORAGE_KEY,
};
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Request;

/// Result of a chat call that reached the server.
pub enum TurnReply {
    Answer(ChatTurnResponse),
    /// Non-OK status, already formatted for display.
    Rejected(String),
}

/// `Err` means the server could not be reached at all.
pub async fn send_turn(request: &ChatTurnRequest) -> Result<TurnReply, String> {
    let response = Request::post(&api_url("/api/chat"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let raw = response.text().await.unwrap_or_default();
        let body = ApiErrorBody::parse(&raw);
        return Ok(TurnReply::Rejected(error_reply(body.detail.as_deref())));
    }

    response
        .json::<ChatTurnResponse>()
        .await
        .map(TurnReply::Answer)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub fn load_history() -> ChatHistory {
    ChatHistory::from_json(storage::get_item(HISTORY_STORAGE_KEY).as_deref())
}

/// Read-modify-write of the stored history in one synchronous step.
pub fn save_session(session: ChatSession) -> ChatHistory {
    let mut history = load_history();
    history.upsert(session);
    storage::set_item(HISTORY_STORAGE_KEY, &history.to_json());
    history
}
