//! Scroll tests

use chatline::tui::screens::chat::ChatState;
use chatline::ChatView;

#[test]
fn test_scroll_up() {
    let mut state = ChatState::new();
    state.max_scroll = 10;
    state.scroll_offset = 5;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 4);
}

#[test]
fn test_scroll_down() {
    let mut state = ChatState::new();
    state.max_scroll = 10;
    state.scroll_offset = 5;

    state.scroll_down();
    assert_eq!(state.scroll_offset, 6);
}

#[test]
fn test_scroll_up_from_pinned_bottom() {
    let mut state = ChatState::new();
    state.max_scroll = 12;
    state.scroll_to_bottom();

    state.scroll_up();
    assert_eq!(state.scroll_offset, 11);
    assert_eq!(state.visible_scroll(), 11);
}

#[test]
fn test_scroll_down_stops_at_bottom() {
    let mut state = ChatState::new();
    state.max_scroll = 3;
    state.scroll_offset = 2;

    state.scroll_down();
    assert_eq!(state.scroll_offset, u16::MAX);
    assert_eq!(state.visible_scroll(), 3);

    state.scroll_down();
    assert_eq!(state.visible_scroll(), 3);
}

#[test]
fn test_scroll_to_bottom() {
    let mut state = ChatState::new();
    state.scroll_offset = 10;

    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_up_at_zero() {
    let mut state = ChatState::new();
    state.scroll_offset = 0;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_view_scroll_pins_to_bottom() {
    let mut state = ChatState::new();
    state.scroll_offset = 3;

    state.scroll_to_end();
    assert_eq!(state.scroll_offset, u16::MAX);
}
