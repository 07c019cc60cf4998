//! # Application Module
//!
//! Chat turn logic and the front-end independent run modes.
//!
//! ## Submodules
//!
//! - [`commands`] - Slash commands shared by the TUI and STDIO modes
//! - [`controller`] - Drives one chat turn from submission to reply or error
//! - [`view`] - Rendering surface the controller mutates, and the in-memory log
//! - [`turn`] - Per-turn state machine
//! - [`stdio`] - Line-oriented interactive mode
//! - [`once`] - Single message mode

pub mod commands;
pub mod controller;
pub mod once;
pub mod stdio;
pub mod turn;
pub mod view;

pub use controller::ChatTurnController;
pub use turn::{PendingTurn, TurnOutcome, TurnState};
pub use view::{ChatLog, ChatView};
