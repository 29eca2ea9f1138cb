use async_trait::async_trait;

use super::service::{ChatService, FALLBACK_REPLY};

/// Anything that can answer a visitor's question.
///
/// Implementations never fail; transport problems become a reply text.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(&self, message: &str, context: &str) -> String;
}

#[async_trait]
impl ChatClient for ChatService {
    async fn send_message(&self, message: &str, context: &str) -> String {
        ChatService::send_message(self, message, context).await
    }
}

/// Client used with `--offline` or when no API key is configured.
#[derive(Debug, Clone, Default)]
pub struct OfflineChatClient {
    reason: Option<String>,
}

impl OfflineChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

#[async_trait]
impl ChatClient for OfflineChatClient {
    async fn send_message(&self, message: &str, _context: &str) -> String {
        tracing::debug!(
            message_len = message.len(),
            reason = self.reason.as_deref().unwrap_or("offline"),
            "Chat offline, returning fallback"
        );
        FALLBACK_REPLY.to_string()
    }
}
