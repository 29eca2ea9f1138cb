//! Portfolio assistant: a single-turn client for a chat completions API.

mod client;
mod error;
mod message;
mod prompt;
mod service;

use std::sync::Arc;

use crate::config::{ChatConfig, CredentialStatus};

pub use client::{ChatClient, OfflineChatClient};
pub use error::ChatError;
pub use message::{ChatMessage, Role};
pub use prompt::system_prompt;
pub use service::{ChatService, EMPTY_REPLY, FALLBACK_REPLY};

/// Pick the client for this run.
///
/// Falls back to [`OfflineChatClient`] when `offline` is set, no key is
/// configured, or the HTTP client cannot be built.
pub fn build_client(config: &ChatConfig, offline: bool) -> Arc<dyn ChatClient> {
    if offline {
        return Arc::new(OfflineChatClient::with_reason("offline mode"));
    }
    match config.resolve_credential() {
        CredentialStatus::Configured(key) => match ChatService::new(config.clone(), key) {
            Ok(service) => {
                tracing::info!(model = %service.model(), "Chat assistant online");
                Arc::new(service)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build chat client");
                Arc::new(OfflineChatClient::with_reason(e.to_string()))
            }
        },
        CredentialStatus::Unconfigured { reason } => {
            tracing::info!(reason = %reason, "Chat assistant offline");
            Arc::new(OfflineChatClient::with_reason(reason))
        }
    }
}
