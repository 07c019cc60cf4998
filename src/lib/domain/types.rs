use crate::constants::PENDING_ID_PREFIX;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageRole {
    User,
    Assistant,
    /// Terminal line of a failed turn
    SystemError,
    /// Local informational line (banner, help output); never part of a turn
    System,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::SystemError => "system-error",
            MessageRole::System => "system",
        }
    }

    /// Prefix shown in front of the message text
    pub fn label(self) -> &'static str {
        match self {
            MessageRole::User => "You: ",
            MessageRole::Assistant => "AI: ",
            MessageRole::SystemError => "AI Error: ",
            MessageRole::System => "System: ",
        }
    }
}

/// Identifier of an in-flight placeholder entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingId(String);

impl PendingId {
    pub fn new() -> Self {
        Self(format!("{PENDING_ID_PREFIX}{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PendingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PendingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single entry of the chat log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub text: String,
    pub pending_id: Option<PendingId>,
    pub created_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            pending_id: None,
            created_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageRole::SystemError, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(MessageRole::System, text)
    }

    /// Assistant placeholder shown while a turn's request is in flight
    pub fn placeholder(text: impl Into<String>, id: PendingId) -> Self {
        Self {
            pending_id: Some(id),
            ..Self::assistant(text)
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_id.is_some()
    }
}
