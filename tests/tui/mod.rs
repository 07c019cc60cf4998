//! TUI unit tests module
//!
//! - chat/: ChatState, input, key handling, scroll tests
