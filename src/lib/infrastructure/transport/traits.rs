//! Transport traits

use super::types::{ChatError, ChatReply};
use async_trait::async_trait;
use std::sync::Arc;

/// One request/response exchange with the chat server.
///
/// Implementations never retry; each call maps to exactly one settled outcome.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Human-readable target of the exchange, used in logs and the status bar
    fn endpoint(&self) -> &str;

    /// Send an already-trimmed message and wait for the reply
    async fn send(&self, message: &str) -> Result<ChatReply, ChatError>;
}

#[async_trait]
impl<T> ChatTransport for Arc<T>
where
    T: ChatTransport + ?Sized,
{
    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }

    async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        (**self).send(message).await
    }
}
