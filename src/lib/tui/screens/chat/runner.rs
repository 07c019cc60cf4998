//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use crate::application::commands::{CommandResult, HELP_TEXT, parse_command};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::{ChatTurnController, PendingTurn};
use crate::domain::ChatMessage;
use crate::infrastructure::transport::{ChatError, ChatReply, ChatTransport};
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Result of chat session
pub enum ChatResult {
    Exit,
}

/// A spawned request settled; applied to the view on the UI loop
pub struct TurnCompleted {
    pub pending: PendingTurn,
    pub result: Result<ChatReply, ChatError>,
}

/// Run the TUI chat interface.
///
/// `notice` starts out in the status bar, e.g. when file logging is unavailable.
pub async fn run_chat<T>(
    controller: ChatTurnController<T>,
    notice: Option<String>,
) -> Result<ChatResult, Box<dyn Error>>
where
    T: ChatTransport + ?Sized + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = initial_state(notice);

    let result = run_chat_loop(&mut terminal, &mut state, &controller).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop<T>(
    terminal: &mut Tui,
    state: &mut ChatState,
    controller: &ChatTurnController<T>,
) -> Result<ChatResult, Box<dyn Error>>
where
    T: ChatTransport + ?Sized + 'static,
{
    let endpoint = controller.transport().endpoint().to_string();
    let (done_tx, mut done_rx) = mpsc::channel::<TurnCompleted>(16);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, &endpoint);
        })?;

        while let Ok(done) = done_rx.try_recv() {
            controller.finish_turn(state, done.pending, done.result);
        }

        let timeout = if state.is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            match handle_input(state, event) {
                InputAction::Exit => return Ok(ChatResult::Exit),

                InputAction::Submit => {
                    let raw = state.input.clone();
                    if let Ok(mut pending) = controller.begin_turn(state, &raw) {
                        state.status_message = None;
                        let request = controller.dispatch(&mut pending);
                        let tx = done_tx.clone();
                        tokio::spawn(async move {
                            let result = request.await;
                            if tx.send(TurnCompleted { pending, result }).await.is_err() {
                                debug!("Chat screen closed before turn settled");
                            }
                        });
                    }
                }

                InputAction::Command(cmd) => {
                    if handle_command(state, &cmd) {
                        return Ok(ChatResult::Exit);
                    }
                }

                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(),
                InputAction::ScrollTop => state.scroll_offset = 0,
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        } else {
            state.tick_loading();
        }
    }
}

fn initial_state(notice: Option<String>) -> ChatState {
    let mut state = ChatState::new();
    state.add_message(ChatMessage::system(
        "Welcome! Type a message and press Enter, or /help for commands.",
    ));
    state.status_message = notice;
    state
}

/// Handle command execution; returns true when the chat should close
fn handle_command(state: &mut ChatState, input: &str) -> bool {
    match parse_command(input) {
        CommandResult::None => {}
        CommandResult::ShowHelp => {
            state.add_message(ChatMessage::system(HELP_TEXT));
        }
        CommandResult::Clear => state.clear_log(),
        CommandResult::Exit => return true,
        CommandResult::Unknown(cmd) => {
            state.add_message(ChatMessage::system(format!(
                "Unknown command: {}. Type /help for available commands.",
                cmd
            )));
        }
    }
    false
}
