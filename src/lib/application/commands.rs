//! Slash commands shared by the interactive front ends

/// Help shown by `/help`
pub const HELP_TEXT: &str = "Available commands:
  /help   - Show this help
  /clear  - Clear the chat log
  /exit   - Exit chat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command, or a bare `/`
    None,
    ShowHelp,
    Clear,
    Exit,
    Unknown(String),
}

/// Only a leading `/` marks a command; anything else is chat text
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parse a slash command
pub fn parse_command(input: &str) -> CommandResult {
    let Some(cmd) = input.trim_start().strip_prefix('/') else {
        return CommandResult::None;
    };
    let name = cmd
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "clear" | "reset" => CommandResult::Clear,
        "exit" | "quit" => CommandResult::Exit,
        _ => CommandResult::Unknown(name),
    }
}
