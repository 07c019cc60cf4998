//! TUI Chat interface module
//!
//! - state.rs: chat state, implements the controller's view
//! - ui.rs: rendering
//! - input.rs: key handling and commands
//! - runner.rs: event loop, spawns requests and applies their results

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use crate::application::commands::{CommandResult, parse_command};
pub use input::{InputAction, handle_input};
pub use runner::{ChatResult, TurnCompleted, run_chat};
pub use state::ChatState;
pub use ui::ChatUI;
