//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/chatline.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable overriding the server base URL
pub const ENV_SERVER_URL: &str = "CHATLINE_SERVER_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "CHATLINE_TIMEOUT_SECS";

/// Prefix for placeholder identifiers
pub const PENDING_ID_PREFIX: &str = "pending-";
