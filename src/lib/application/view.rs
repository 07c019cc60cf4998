//! Rendering surface injected into the turn controller
//!
//! The controller never touches a terminal directly; it mutates whatever
//! implements [`ChatView`]. [`ChatLog`] is the in-memory implementation that
//! front-ends embed and tests inspect.

use crate::domain::{ChatMessage, PendingId};

/// Operations the turn controller needs from a rendering surface
pub trait ChatView {
    /// Append a message at the end of the log
    fn append_message(&mut self, message: ChatMessage);

    /// Remove the placeholder with the given id; returns whether it was present
    fn remove_message(&mut self, id: &PendingId) -> bool;

    /// Bring the latest entry into view
    fn scroll_to_end(&mut self);

    /// Clear the input field, if the surface has one
    fn clear_input(&mut self) {}
}

/// Ordered, append-only list of messages (placeholders aside)
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    scroll_requests: usize,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Number of placeholders still waiting on a reply
    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_pending()).count()
    }

    pub fn contains_pending(&self, id: &PendingId) -> bool {
        self.messages
            .iter()
            .any(|m| m.pending_id.as_ref() == Some(id))
    }

    /// How many times the log was asked to scroll to its end
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Drop every settled message, keeping placeholders of in-flight turns
    pub fn clear_resolved(&mut self) {
        self.messages.retain(ChatMessage::is_pending);
    }
}

impl ChatView for ChatLog {
    fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    fn remove_message(&mut self, id: &PendingId) -> bool {
        match self
            .messages
            .iter()
            .position(|m| m.pending_id.as_ref() == Some(id))
        {
            Some(index) => {
                self.messages.remove(index);
                true
            }
            None => false,
        }
    }

    fn scroll_to_end(&mut self) {
        self.scroll_requests += 1;
    }
}
