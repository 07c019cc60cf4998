//! Infrastructure: network access to the chat server

pub mod transport;
