//! Transport types - request/reply bodies and error types

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Body posted to the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequestBody {
    pub message: String,
}

/// Successful reply from the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// Parse a response body; a missing or non-string `reply` is malformed.
    pub fn from_body(body: &[u8]) -> Result<Self, ChatError> {
        serde_json::from_slice(body).map_err(|e| ChatError::malformed(e.to_string()))
    }
}

/// Every way a chat turn can fail
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,
    #[error("chat server responded with status {status}")]
    HttpStatus { status: StatusCode, body: String },
    #[error("network error reaching chat server: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("chat server did not answer within {after:?}")]
    Timeout { after: Duration },
    #[error("chat server returned a malformed reply: {reason}")]
    MalformedResponse { reason: String },
}

impl ChatError {
    pub fn http_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn timeout(after: Duration) -> Self {
        Self::Timeout { after }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Short category name for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::EmptyInput => "empty_input",
            ChatError::HttpStatus { .. } => "http_status",
            ChatError::Network { .. } => "network",
            ChatError::Timeout { .. } => "timeout",
            ChatError::MalformedResponse { .. } => "malformed_response",
        }
    }

    /// Human-readable cause, printed by single message mode
    pub fn user_message(&self) -> String {
        match self {
            ChatError::EmptyInput => "Nothing to send.".to_string(),
            ChatError::HttpStatus { status, .. } => match *status {
                StatusCode::NOT_FOUND => "Chat endpoint not found.".to_string(),
                StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                    "Chat server is currently unavailable.".to_string()
                }
                _ => format!("Chat request failed: {}", status.as_u16()),
            },
            ChatError::Network { source } => {
                if source.is_connect() {
                    "Cannot connect to the chat server.".to_string()
                } else if source.is_timeout() {
                    "Request to the chat server timed out.".to_string()
                } else {
                    "Network error talking to the chat server.".to_string()
                }
            }
            ChatError::Timeout { .. } => "Request to the chat server timed out.".to_string(),
            ChatError::MalformedResponse { .. } => {
                "Chat server sent a reply that could not be read.".to_string()
            }
        }
    }
}
