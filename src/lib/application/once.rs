//! Single message mode: send one message, print the reply, exit

use super::controller::ChatTurnController;
use super::view::ChatLog;
use crate::infrastructure::transport::{ChatError, ChatTransport};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OnceError {
    #[error("no message given")]
    EmptyInput,
    #[error("{text} ({})", .source.user_message())]
    Failed {
        text: String,
        #[source]
        source: ChatError,
    },
    #[error("failed to write reply: {0}")]
    Io(#[from] io::Error),
}

/// Run a single turn and write the reply to `out`.
pub async fn run<T, W>(
    controller: &ChatTurnController<T>,
    message: &str,
    out: &mut W,
) -> Result<(), OnceError>
where
    T: ChatTransport + ?Sized + 'static,
    W: Write,
{
    let mut log = ChatLog::new();
    let outcome = controller
        .submit_turn(&mut log, message)
        .await
        .ok_or(OnceError::EmptyInput)?;

    let text = log.last().map(|m| m.text.clone()).unwrap_or_default();
    match outcome.error {
        None => {
            writeln!(out, "{text}")?;
            Ok(())
        }
        Some(source) => Err(OnceError::Failed { text, source }),
    }
}
