//! Line-oriented chat over stdin/stdout

use super::commands::{self, CommandResult, HELP_TEXT};
use super::controller::ChatTurnController;
use super::view::{ChatLog, ChatView};
use crate::domain::{ChatMessage, PendingId};
use crate::infrastructure::transport::ChatTransport;
use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self as std_io, IsTerminal, Write};
use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes each appended message as one line.
///
/// A removed placeholder is erased from an interactive terminal when it is still
/// the last printed line; on a pipe it simply stays in the transcript.
pub struct StdioView<W: Write> {
    log: ChatLog,
    out: W,
    erase_placeholders: bool,
    last_printed: Option<PendingId>,
}

impl<W: Write> StdioView<W> {
    pub fn new(out: W, erase_placeholders: bool) -> Self {
        Self {
            log: ChatLog::new(),
            out,
            erase_placeholders,
            last_printed: None,
        }
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_message(&mut self, message: &ChatMessage) -> std_io::Result<()> {
        let mut lines = message.text.lines();
        let first = lines.next().unwrap_or("");
        writeln!(self.out, "{}{}", message.role.label(), first)?;
        let indent = " ".repeat(message.role.label().len());
        for line in lines {
            writeln!(self.out, "{indent}{line}")?;
        }
        self.out.flush()
    }

    fn erase_last_line(&mut self) -> std_io::Result<()> {
        queue!(self.out, MoveToPreviousLine(1), Clear(ClearType::CurrentLine))?;
        self.out.flush()
    }
}

impl<W: Write> ChatView for StdioView<W> {
    fn append_message(&mut self, message: ChatMessage) {
        if let Err(e) = self.write_message(&message) {
            warn!(error = %e, "Failed to write message to stdout");
        }
        self.last_printed = message.pending_id.clone();
        self.log.append_message(message);
    }

    fn remove_message(&mut self, id: &PendingId) -> bool {
        let removed = self.log.remove_message(id);
        if removed && self.erase_placeholders && self.last_printed.as_ref() == Some(id) {
            if let Err(e) = self.erase_last_line() {
                warn!(error = %e, "Failed to erase placeholder line");
            }
            self.last_printed = None;
        }
        removed
    }

    fn scroll_to_end(&mut self) {
        self.log.scroll_to_end();
    }
}

enum LoopControl {
    Continue,
    Exit,
}

pub async fn run<T>(controller: ChatTurnController<T>) -> Result<(), StdioError>
where
    T: ChatTransport + ?Sized + 'static,
{
    let stdout = std_io::stdout();
    let interactive = stdout.is_terminal();
    let mut view = StdioView::new(stdout, interactive);
    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();

    print_banner(&mut view, controller.transport().endpoint());

    loop {
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                info!("STDIN closed, leaving STDIO mode");
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if commands::is_command(input) {
            match handle_command(input, &mut view) {
                LoopControl::Continue => continue,
                LoopControl::Exit => break,
            }
        } else {
            controller.submit_turn(&mut view, input).await;
        }
    }

    Ok(())
}

fn handle_command<W: Write>(input: &str, view: &mut StdioView<W>) -> LoopControl {
    let command = commands::parse_command(input);
    debug!(command = ?command, "Processing STDIO command");

    match command {
        CommandResult::None => LoopControl::Continue,
        CommandResult::ShowHelp => {
            view.append_message(ChatMessage::system(HELP_TEXT));
            LoopControl::Continue
        }
        CommandResult::Clear => {
            view.log.clear_resolved();
            view.append_message(ChatMessage::system("Chat log cleared."));
            LoopControl::Continue
        }
        CommandResult::Exit => LoopControl::Exit,
        CommandResult::Unknown(name) => {
            view.append_message(ChatMessage::system(format!(
                "Unknown command '{name}'. Type /help for available commands."
            )));
            LoopControl::Continue
        }
    }
}

fn print_banner<W: Write>(view: &mut StdioView<W>, endpoint: &str) {
    view.append_message(ChatMessage::system(format!(
        "Connected to {endpoint}. Type a message, or /help for commands."
    )));
}
