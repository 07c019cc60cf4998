//! Chat transport infrastructure
//!
//! Issues the single request/response exchange against the chat endpoint.
//!
//! # Structure
//! - `types` - Request/reply bodies and the error taxonomy
//! - `traits` - ChatTransport trait injected into the turn controller
//! - `http` - reqwest implementation of the `/chat` contract

pub mod http;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use http::HttpChatClient;
pub use traits::ChatTransport;
pub use reqwest::StatusCode;
pub use types::{ChatError, ChatReply, ChatRequestBody};
