//! ChatState tests

use chatline::tui::screens::chat::ChatState;
use chatline::{ChatMessage, ChatView, MessageRole, PendingId};

#[test]
fn test_chat_state_new() {
    let state = ChatState::new();

    assert!(state.messages().is_empty());
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, 0);
    assert!(!state.is_loading());
    assert!(state.status_message.is_none());
}

#[test]
fn test_add_message_scrolls_to_bottom() {
    let mut state = ChatState::new();

    state.add_message(ChatMessage::system("Welcome"));

    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.messages()[0].role, MessageRole::System);
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_loading_follows_placeholders() {
    let mut state = ChatState::new();
    let first = PendingId::new();
    let second = PendingId::new();

    state.append_message(ChatMessage::placeholder("Searching...", first.clone()));
    state.append_message(ChatMessage::placeholder("Searching...", second.clone()));
    assert!(state.is_loading());
    assert_eq!(state.in_flight(), 2);

    assert!(state.remove_message(&first));
    assert_eq!(state.in_flight(), 1);
    assert!(state.remove_message(&second));
    assert!(!state.is_loading());
}

#[test]
fn test_clear_input_via_view() {
    let mut state = ChatState::new();
    state.input = "draft".to_string();
    state.cursor_pos = 3;

    state.clear_input();

    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_clear_log_keeps_in_flight_placeholder() {
    let mut state = ChatState::new();
    let id = PendingId::new();
    state.append_message(ChatMessage::user("hello"));
    state.append_message(ChatMessage::placeholder("Searching...", id.clone()));
    state.append_message(ChatMessage::error("boom"));

    state.clear_log();

    assert_eq!(state.messages().len(), 1);
    assert!(state.is_loading());
    assert!(state.status_message.is_some());
}

#[test]
fn test_loading_tick() {
    let mut state = ChatState::new();
    state.append_message(ChatMessage::placeholder("Searching...", PendingId::new()));
    state.loading_frame = 0;

    state.tick_loading();
    assert_eq!(state.loading_frame, 1);

    state.loading_frame = 3;
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn test_tick_is_idle_without_turns() {
    let mut state = ChatState::new();
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}
