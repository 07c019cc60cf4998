use super::app::timeout_from_secs;
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH, ENV_SERVER_URL, ENV_TIMEOUT_SECS};
use dotenvy::from_filename;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for (de)serialization from TOML
#[derive(Debug, Deserialize, Serialize, Default)]
pub(super) struct RawConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl From<&super::AppConfig> for RawConfig {
    fn from(config: &super::AppConfig) -> Self {
        Self {
            server_url: Some(config.server_url.clone()),
            chat_path: Some(config.chat_path.clone()),
            request_timeout_secs: Some(config.request_timeout.map_or(0, |d| d.as_secs())),
            placeholder_text: Some(config.placeholder_text.clone()),
            error_text: Some(config.error_text.clone()),
            log_file: Some(config.log_file.display().to_string()),
        }
    }
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path.
///
/// An explicit path must exist; a missing default file falls back to defaults.
/// Environment overrides are applied on top of the file.
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let parsed = match path {
        Some(path) => read_config(&expand_path(path))?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)?
            } else {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                RawConfig::default()
            }
        }
    };

    let config = apply_env_overrides(build(parsed))?;
    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn build(parsed: RawConfig) -> super::AppConfig {
    let defaults = super::AppConfig::default();
    super::AppConfig {
        server_url: parsed.server_url.unwrap_or(defaults.server_url),
        chat_path: parsed.chat_path.unwrap_or(defaults.chat_path),
        request_timeout: parsed
            .request_timeout_secs
            .map_or(defaults.request_timeout, timeout_from_secs),
        placeholder_text: parsed.placeholder_text.unwrap_or(defaults.placeholder_text),
        error_text: parsed.error_text.unwrap_or(defaults.error_text),
        log_file: parsed
            .log_file
            .map(|p| expand_path(Path::new(&p)))
            .unwrap_or(defaults.log_file),
    }
}

fn apply_env_overrides(mut config: super::AppConfig) -> Result<super::AppConfig, ConfigError> {
    if let Ok(url) = env::var(ENV_SERVER_URL) {
        if !url.trim().is_empty() {
            debug!(url = %url, "Overriding server_url from environment");
            config.server_url = url.trim().to_string();
        }
    }

    if let Ok(value) = env::var(ENV_TIMEOUT_SECS) {
        let secs: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: ENV_TIMEOUT_SECS.to_string(),
            value: value.clone(),
        })?;
        config.request_timeout = timeout_from_secs(secs);
    }

    Ok(config)
}

/// Expand `~` and environment variables in a user-supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
