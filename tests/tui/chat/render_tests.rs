//! Rendering tests on an in-memory backend

use chatline::tui::screens::chat::{ChatState, ChatUI};
use chatline::{ChatMessage, ChatView};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 16;

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
}

/// Draw one frame and return the screen, one row per line
fn draw(terminal: &mut Terminal<TestBackend>, state: &mut ChatState) -> String {
    terminal
        .draw(|frame| ChatUI::render(frame, state, "http://test/chat"))
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_pinned_view_shows_end_of_wrapped_reply() {
    let mut terminal = terminal();
    let mut state = ChatState::new();
    for i in 0..8 {
        state.append_message(ChatMessage::user(format!("question {i}")));
    }
    let long_reply = format!("{}ENDMARK", "word ".repeat(58));
    state.append_message(ChatMessage::assistant(long_reply));
    state.scroll_to_end();

    let screen = draw(&mut terminal, &mut state);

    assert!(screen.contains("ENDMARK"), "screen was:\n{screen}");
    assert!(state.max_scroll > 0);
}

#[test]
fn test_scroll_up_from_bottom_moves_view() {
    let mut terminal = terminal();
    let mut state = ChatState::new();
    for i in 0..20 {
        state.append_message(ChatMessage::user(format!("message {i}")));
    }
    state.scroll_to_end();

    let bottom = draw(&mut terminal, &mut state);
    assert!(bottom.contains("message 19"));

    state.scroll_up();
    let scrolled = draw(&mut terminal, &mut state);

    assert_ne!(bottom, scrolled);
    assert_eq!(state.visible_scroll(), state.max_scroll - 1);

    state.scroll_down();
    let back = draw(&mut terminal, &mut state);
    assert_eq!(state.scroll_offset, u16::MAX);
    assert!(back.contains("message 19"));
}

#[test]
fn test_new_entry_after_scrolling_up_is_visible() {
    let mut terminal = terminal();
    let mut state = ChatState::new();
    for i in 0..20 {
        state.append_message(ChatMessage::user(format!("message {i}")));
    }
    state.scroll_to_end();
    draw(&mut terminal, &mut state);
    state.scroll_offset = 0;

    state.append_message(ChatMessage::assistant("latest reply"));
    state.scroll_to_end();
    let screen = draw(&mut terminal, &mut state);

    assert!(screen.contains("latest reply"), "screen was:\n{screen}");
}
