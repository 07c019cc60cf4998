//! Shared test doubles

#![allow(dead_code)]

use async_trait::async_trait;
use chatline::transport::{ChatError, ChatReply, ChatTransport, StatusCode};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Canned outcome for one call of [`ScriptedTransport`]
pub enum Script {
    Reply(&'static str),
    Status(u16),
    Malformed,
    TimedOut,
    /// Reply after a delay, so concurrent turns can settle out of order
    DelayedReply(&'static str, Duration),
}

/// Transport that answers from a script and records what was sent
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Script>>,
    sent: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Script>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            sent: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    fn endpoint(&self) -> &str {
        "scripted://chat"
    }

    async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(message.to_string());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Script::Reply(text)) => Ok(ChatReply::new(text)),
            Some(Script::Status(code)) => Err(ChatError::http_status(
                StatusCode::from_u16(code).unwrap(),
                "",
            )),
            Some(Script::Malformed) => ChatReply::from_body(b"{}"),
            Some(Script::TimedOut) => Err(ChatError::timeout(Duration::from_secs(1))),
            Some(Script::DelayedReply(text, delay)) => {
                tokio::time::sleep(delay).await;
                Ok(ChatReply::new(text))
            }
            None => Err(ChatError::malformed("script exhausted")),
        }
    }
}
