//! Key handling and command parsing tests

use chatline::tui::screens::chat::{
    ChatState, CommandResult, InputAction, handle_input, parse_command,
};
use chatline::{ChatMessage, ChatView, PendingId};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[test]
fn test_enter_submits_text() {
    let mut state = ChatState::new();
    state.input = "hello".to_string();

    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
    // The controller clears the field, not the key handler
    assert_eq!(state.input, "hello");
}

#[test]
fn test_enter_on_blank_input_keeps_it() {
    let mut state = ChatState::new();
    state.input = "   ".to_string();
    state.cursor_pos = 3;

    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::None);
    assert_eq!(state.input, "   ");
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_enter_on_command_takes_input() {
    let mut state = ChatState::new();
    state.input = "/help".to_string();

    assert_eq!(
        handle_input(&mut state, key(KeyCode::Enter)),
        InputAction::Command("/help".to_string())
    );
    assert!(state.input.is_empty());
}

#[test]
fn test_typing_allowed_while_turn_in_flight() {
    let mut state = ChatState::new();
    state.append_message(ChatMessage::placeholder("Searching...", PendingId::new()));

    handle_input(&mut state, key(KeyCode::Char('b')));
    assert_eq!(state.input, "b");
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_ctrl_q_exits() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, ctrl('q')), InputAction::Exit);
}

#[test]
fn test_message_may_start_with_q() {
    let mut state = ChatState::new();
    for c in "quick question".chars() {
        assert_eq!(handle_input(&mut state, key(KeyCode::Char(c))), InputAction::None);
    }
    assert_eq!(state.input, "quick question");
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_colon_text_is_a_message() {
    let mut state = ChatState::new();
    state.input = ":) thanks".to_string();
    state.cursor_pos = 9;

    assert!(!state.is_command());
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
    assert_eq!(state.input, ":) thanks");
}

#[test]
fn test_escape_and_ctrl_c_clear_input() {
    let mut state = ChatState::new();
    state.input = "draft".to_string();
    state.cursor_pos = 5;
    handle_input(&mut state, key(KeyCode::Esc));
    assert!(state.input.is_empty());

    state.input = "draft".to_string();
    state.cursor_pos = 5;
    handle_input(&mut state, ctrl('c'));
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_scroll_keys() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, key(KeyCode::PageUp)), InputAction::ScrollUp);
    assert_eq!(handle_input(&mut state, key(KeyCode::Down)), InputAction::ScrollDown);
    assert_eq!(handle_input(&mut state, ctrl('u')), InputAction::ScrollTop);
    assert_eq!(handle_input(&mut state, ctrl('d')), InputAction::ScrollBottom);
}

#[test]
fn test_parse_command() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/?"), CommandResult::ShowHelp);
    assert_eq!(parse_command(":?"), CommandResult::None);
    assert_eq!(parse_command("/CLEAR"), CommandResult::Clear);
    assert_eq!(parse_command("/quit now"), CommandResult::Exit);
    assert_eq!(parse_command("/"), CommandResult::None);
    assert_eq!(
        parse_command("/nope"),
        CommandResult::Unknown("nope".to_string())
    );
}
