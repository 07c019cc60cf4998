//! HTTP chat client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::traits::ChatTransport;
use super::types::{ChatError, ChatReply, ChatRequestBody};
use crate::config::AppConfig;

/// Posts `{"message": ...}` to the chat endpoint and reads `{"reply": ...}` back
#[derive(Clone)]
pub struct HttpChatClient {
    url: String,
    timeout: Option<Duration>,
    http: Client,
}

impl HttpChatClient {
    pub fn new(base_url: &str, chat_path: &str) -> Self {
        Self {
            url: build_url(base_url, chat_path),
            timeout: None,
            http: Client::new(),
        }
    }

    /// Creates client from application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.server_url, &config.chat_path).with_timeout(config.request_timeout)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn exchange(&self, message: &str) -> Result<ChatReply, ChatError> {
        let body = ChatRequestBody {
            message: message.to_string(),
        };

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(ChatError::network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Chat server returned error status");
            return Err(ChatError::http_status(status, body));
        }

        let bytes = response.bytes().await.map_err(ChatError::network)?;
        debug!(bytes = bytes.len(), "Received chat response body");
        ChatReply::from_body(&bytes)
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        info!(
            url = self.url.as_str(),
            chars = message.chars().count(),
            "Sending chat message"
        );

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(message))
                .await
                .map_err(|_| ChatError::timeout(limit))?,
            None => self.exchange(message).await,
        }
    }
}

/// Join base URL and path with exactly one slash between them
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
