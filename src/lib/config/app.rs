use super::defaults::{
    DEFAULT_CHAT_PATH, DEFAULT_ERROR_TEXT, DEFAULT_LOG_FILE, DEFAULT_PLACEHOLDER_TEXT,
    DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS,
};
use super::error::ConfigError;
use super::loader::RawConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration loaded from chatline.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the chat server, without the endpoint path
    pub server_url: String,
    pub chat_path: String,
    /// `None` waits for the server indefinitely
    pub request_timeout: Option<Duration>,
    /// Text of the in-flight placeholder entry
    pub placeholder_text: String,
    /// Fixed text of the entry that replaces a failed turn's placeholder
    pub error_text: String,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Override the server base URL (e.g. from a CLI flag)
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Override the timeout; `0` disables it
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = timeout_from_secs(secs);
        self
    }

    /// Check invariants that CLI overrides could break after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl {
                url: self.server_url.clone(),
            });
        }
        if self.chat_path.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "chat_path" });
        }
        if self.placeholder_text.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "placeholder_text",
            });
        }
        if self.error_text.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "error_text" });
        }
        Ok(())
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let raw = RawConfig::from(self);
        Ok(toml::to_string_pretty(&raw)?)
    }
}

pub(super) fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
