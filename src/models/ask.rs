use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the ask panel transcript (memory only)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}
