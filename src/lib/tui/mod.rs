//! TUI module for terminal user interface using Ratatui
//!
//! Provides the full-screen chat screen.

pub mod screens;
mod terminal;
pub mod theme;

pub use terminal::{Tui, install_panic_hook, restore_terminal};
