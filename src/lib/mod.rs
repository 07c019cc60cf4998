pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::{ChatLog, ChatTurnController, ChatView, TurnOutcome, TurnState, once, stdio};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ConfigError};
pub use domain::{ChatMessage, MessageRole, PendingId};
pub use infrastructure::transport;

use infrastructure::transport::{ChatTransport, HttpChatClient};
use std::error::Error;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mode = cli.effective_mode();

    let config_path = cli.config.as_deref().map(Path::new);
    let config = resolve_config(&cli, config_path)?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let log_notice = match mode {
        RunMode::Tui => init_tracing(LogTarget::File(config.log_file.clone()))
            .err()
            .map(|e| format!("Logging disabled: cannot open {}: {e}", config.log_file.display())),
        RunMode::Stdio | RunMode::Once => init_tracing(LogTarget::Stderr).err().map(|e| e.to_string()),
    };
    info!("Starting chatline");
    debug!(mode = ?mode, config = ?cli.config, "CLI arguments parsed");

    let transport = Arc::new(HttpChatClient::from_config(&config));
    let controller = ChatTurnController::from_config(transport, &config);
    info!(
        endpoint = controller.transport().endpoint(),
        timeout = ?config.request_timeout,
        "Chat transport ready"
    );

    info!(mode = ?mode, "Running client in selected mode");
    match mode {
        RunMode::Tui => {
            tui::install_panic_hook();
            tui::screens::run_chat(controller, log_notice).await?;
        }
        RunMode::Stdio => {
            if let Some(notice) = log_notice {
                eprintln!("{notice}");
            }
            stdio::run(controller).await?;
        }
        RunMode::Once => {
            let message = cli.joined_message();
            once::run(&controller, &message, &mut io::stdout()).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

/// Load the file config, then apply CLI overrides on top
pub fn resolve_config(cli: &Cli, path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::load(path)?;
    if let Some(server) = &cli.server {
        if *server != config.server_url {
            info!(url = %server, "Overriding server_url based on CLI flag");
        }
        config = config.with_server_url(server.trim());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs);
    }
    config.validate()?;
    Ok(config)
}

enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber once. In TUI mode the caller shows a failure
/// on screen, since nothing would record it otherwise.
fn init_tracing(target: LogTarget) -> io::Result<()> {
    static INIT: std::sync::Once = std::sync::Once::new();
    let mut result = Ok(());
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true);

        match target {
            LogTarget::Stderr => {
                let _ = builder.with_writer(io::stderr).try_init();
            }
            // The TUI owns the screen, so logs go to a file
            LogTarget::File(path) => match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    let _ = builder
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                Err(e) => result = Err(e),
            },
        }
    });
    result
}
