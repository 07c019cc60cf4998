use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "chatline",
    version,
    about = "Terminal chat client for a single HTTP chat endpoint"
)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// Base URL of the chat server, e.g. http://127.0.0.1:5000
    #[arg(long)]
    pub server: Option<String>,
    /// Request timeout in seconds; 0 waits indefinitely
    #[arg(long)]
    pub timeout: Option<u64>,
    #[arg(long, short, value_enum)]
    pub mode: Option<RunMode>,
    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
    /// Message to send in `once` mode
    pub message: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen chat
    Tui,
    /// Line-oriented chat over stdin/stdout
    Stdio,
    /// Send the positional message, print the reply, exit
    Once,
}

impl Cli {
    /// Explicit `--mode`, else `once` when a message was given, else `tui`
    pub fn effective_mode(&self) -> RunMode {
        match self.mode {
            Some(mode) => mode,
            None if !self.message.is_empty() => RunMode::Once,
            None => RunMode::Tui,
        }
    }

    pub fn joined_message(&self) -> String {
        self.message.join(" ")
    }
}
