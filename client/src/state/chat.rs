//! Chat-mode conversation history.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use stats::StatsResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message. Assistant messages carry the full envelope so
/// tables and charts render inline.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub response: Option<StatsResponse>,
}

/// State for the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatState {
    /// Append the user's question and mark a request in flight.
    pub fn push_question(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::User,
            content: text.to_owned(),
            response: None,
        });
        self.loading = true;
    }

    /// Append the backend answer and clear the in-flight flag.
    pub fn push_answer(&mut self, response: StatsResponse) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            content: response.answer.clone(),
            response: Some(response),
        });
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.loading = false;
    }
}
