pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Searching...";
pub const DEFAULT_ERROR_TEXT: &str = "Check the log. (Is the chat server running?)";
pub const DEFAULT_LOG_FILE: &str = "chatline.log";
