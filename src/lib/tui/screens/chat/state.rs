//! Chat state management

use crate::application::commands;
use crate::application::view::{ChatLog, ChatView};
use crate::domain::{ChatMessage, PendingId};

/// Chat screen state
pub struct ChatState {
    /// Message history
    pub log: ChatLog,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, in characters
    pub cursor_pos: usize,
    /// Scroll offset for messages; `u16::MAX` pins the view to the bottom
    pub scroll_offset: u16,
    /// Largest useful offset, as of the last render
    pub max_scroll: u16,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message
    pub status_message: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            log: ChatLog::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            max_scroll: 0,
            loading_frame: 0,
            status_message: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }

    /// Whether any turn is still waiting on its reply
    pub fn is_loading(&self) -> bool {
        self.log.pending_count() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.log.pending_count()
    }

    /// Add a local message to history
    pub fn add_message(&mut self, message: ChatMessage) {
        self.log.append_message(message);
        self.scroll_to_bottom();
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.input.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let at = self.byte_index(self.cursor_pos - 1);
            self.input.remove(at);
            self.cursor_pos -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = self.byte_index(self.cursor_pos);
            self.input.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    /// Offset actually shown, with the bottom pin resolved
    pub fn visible_scroll(&self) -> u16 {
        self.scroll_offset.min(self.max_scroll)
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.visible_scroll().saturating_sub(1);
    }

    /// Scroll messages down; reaching the end pins the view to the bottom again
    pub fn scroll_down(&mut self) {
        let next = self.visible_scroll().saturating_add(1);
        if next >= self.max_scroll {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset = next;
        }
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved against max_scroll during render
        self.scroll_offset = u16::MAX;
    }

    /// Clear settled messages; in-flight placeholders stay so their turns can land
    pub fn clear_log(&mut self) {
        self.log.clear_resolved();
        self.scroll_offset = 0;
        self.status_message = Some("Chat log cleared".into());
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.is_loading() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        commands::is_command(&self.input)
    }
}

impl ChatView for ChatState {
    fn append_message(&mut self, message: ChatMessage) {
        self.log.append_message(message);
    }

    fn remove_message(&mut self, id: &PendingId) -> bool {
        self.log.remove_message(id)
    }

    fn scroll_to_end(&mut self) {
        self.scroll_to_bottom();
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }
}
