//! Chat turn controller
//!
//! Owns the lifecycle of one user-initiated exchange: capture input, render the
//! optimistic entries, issue the request, then reconcile the view with the
//! reply or the failure. Nothing carries over between turns.

use super::turn::{PendingTurn, TurnOutcome, TurnState};
use super::view::ChatView;
use crate::config::AppConfig;
use crate::config::defaults::{DEFAULT_ERROR_TEXT, DEFAULT_PLACEHOLDER_TEXT};
use crate::domain::ChatMessage;
use crate::infrastructure::transport::{ChatError, ChatReply, ChatTransport};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct ChatTurnController<T: ?Sized> {
    transport: Arc<T>,
    placeholder_text: String,
    error_text: String,
}

impl<T: ?Sized> Clone for ChatTurnController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            placeholder_text: self.placeholder_text.clone(),
            error_text: self.error_text.clone(),
        }
    }
}

impl<T> ChatTurnController<T>
where
    T: ChatTransport + ?Sized + 'static,
{
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            error_text: DEFAULT_ERROR_TEXT.to_string(),
        }
    }

    pub fn from_config(transport: Arc<T>, config: &AppConfig) -> Self {
        Self::new(transport)
            .with_placeholder_text(config.placeholder_text.clone())
            .with_error_text(config.error_text.clone())
    }

    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Synchronous half of a turn.
    ///
    /// Blank input returns `ChatError::EmptyInput` and leaves the view, including
    /// the input field, untouched. Otherwise the input is cleared and the user
    /// entry plus a placeholder are appended before anything is awaited.
    pub fn begin_turn<V>(&self, view: &mut V, raw_input: &str) -> Result<PendingTurn, ChatError>
    where
        V: ChatView + ?Sized,
    {
        let text = raw_input.trim();
        if text.is_empty() {
            debug!("Ignoring blank submission");
            return Err(ChatError::EmptyInput);
        }

        let pending = PendingTurn::new(text.to_string());
        view.clear_input();
        view.append_message(ChatMessage::user(text));
        view.append_message(ChatMessage::placeholder(
            self.placeholder_text.clone(),
            pending.id().clone(),
        ));
        view.scroll_to_end();

        debug!(pending_id = %pending.id(), "Turn submitted");
        Ok(pending)
    }

    /// Request future for a submitted turn; `'static` so it can be spawned.
    pub fn dispatch(&self, pending: &mut PendingTurn) -> BoxFuture<'static, Result<ChatReply, ChatError>> {
        pending.mark_awaiting();
        let transport = Arc::clone(&self.transport);
        let text = pending.text().to_string();
        Box::pin(async move { transport.send(&text).await })
    }

    /// Settle a turn: drop its placeholder, then append the reply or the error entry.
    pub fn finish_turn<V>(
        &self,
        view: &mut V,
        pending: PendingTurn,
        result: Result<ChatReply, ChatError>,
    ) -> TurnOutcome
    where
        V: ChatView + ?Sized,
    {
        let id = pending.into_id();
        if !view.remove_message(&id) {
            warn!(pending_id = %id, "Placeholder already gone when turn settled");
        }

        let outcome = match result {
            Ok(reply) => {
                info!(pending_id = %id, chars = reply.reply.chars().count(), "Turn resolved");
                view.append_message(ChatMessage::assistant(reply.reply));
                TurnOutcome {
                    id,
                    state: TurnState::Resolved,
                    error: None,
                }
            }
            Err(err) => {
                match &err {
                    ChatError::HttpStatus { status, body } => error!(
                        pending_id = %id,
                        status = status.as_u16(),
                        body = body.as_str(),
                        "Error communicating with the chat server"
                    ),
                    other => error!(
                        pending_id = %id,
                        kind = other.kind(),
                        error = %other,
                        "Error communicating with the chat server"
                    ),
                }
                view.append_message(ChatMessage::error(self.error_text.clone()));
                TurnOutcome {
                    id,
                    state: TurnState::Failed,
                    error: Some(err),
                }
            }
        };

        view.scroll_to_end();
        outcome
    }

    /// Run a whole turn inline. Returns `None` for blank input.
    pub async fn submit_turn<V>(&self, view: &mut V, raw_input: &str) -> Option<TurnOutcome>
    where
        V: ChatView + ?Sized,
    {
        let mut pending = self.begin_turn(view, raw_input).ok()?;
        let result = self.dispatch(&mut pending).await;
        Some(self.finish_turn(view, pending, result))
    }
}
