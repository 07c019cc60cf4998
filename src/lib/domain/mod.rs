//! Domain types shared by the controller, transports and front-ends.

pub mod types;

pub use types::{ChatMessage, MessageRole, PendingId};
