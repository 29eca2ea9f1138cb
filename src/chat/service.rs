//! HTTP client for an OpenAI-compatible chat completions endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::{ChatConfig, SecureString};
use crate::content::PROFILE;

use super::error::ChatError;
use super::message::Role;
use super::prompt::system_prompt;

/// Shown when the endpoint could not be reached or answered with an error.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again later.";

/// Shown when the endpoint answered but carried no message content.
pub const EMPTY_REPLY: &str = "Sorry, I could not process your request.";

/// Client for the portfolio assistant.
///
/// One request per question; there is no conversation memory on the wire.
pub struct ChatService {
    client: Client,
    config: ChatConfig,
    api_key: SecureString,
}

impl ChatService {
    pub fn new(config: ChatConfig, api_key: SecureString) -> Result<Self, ChatError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Ask one question. Errors are returned as-is.
    pub async fn try_send(&self, message: &str, context: &str) -> Result<String, ChatError> {
        if self.api_key.expose().is_empty() {
            return Err(ChatError::NotConfigured);
        }

        let request_body = self.build_request(message, context);
        let url = self.config.completions_url();

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            message_len = message.len(),
            "Sending chat request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&request_body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Chat API error"
            );

            return Err(ChatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let response_body: ApiResponse = serde_json::from_str(&response_text)
            .map_err(|e| ChatError::Parse(format!("Failed to parse response JSON: {}", e)))?;

        let reply = extract_content(response_body)?;
        tracing::debug!(latency_ms, reply_len = reply.len(), "Chat reply received");
        Ok(reply)
    }

    /// Ask one question, always producing text for the transcript.
    pub async fn send_message(&self, message: &str, context: &str) -> String {
        match self.try_send(message, context).await {
            Ok(reply) => reply,
            Err(ChatError::EmptyResponse) => {
                tracing::warn!("Chat response had no content");
                EMPTY_REPLY.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat request failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    fn build_request(&self, message: &str, context: &str) -> ApiRequest {
        ApiRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: system_prompt(&PROFILE, context),
                },
                Message {
                    role: Role::User,
                    content: message.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

fn extract_content(response: ApiResponse) -> Result<String, ChatError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ChatError::EmptyResponse)
}

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: Role,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_service() -> ChatService {
        let config = ChatConfig {
            base_url: "https://api.example.com/v1".to_string(),
            model: "test-model".to_string(),
            ..ChatConfig::default()
        };
        ChatService::new(config, SecureString::new("test-key".to_string())).unwrap()
    }

    #[test]
    fn request_has_system_then_user_message() {
        let service = make_service();
        let body = serde_json::to_value(service.build_request("Tell me about YOLO", "")).unwrap();

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Tell me about YOLO");
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn extract_content_reads_first_choice() {
        let response: ApiResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_content(response).unwrap(), "first");
    }

    #[test]
    fn extract_content_empty_variants() {
        for value in [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{}]}),
            json!({"choices": [{"message": {"content": null}}]}),
            json!({"choices": [{"message": {"content": "   "}}]}),
        ] {
            let response: ApiResponse = serde_json::from_value(value).unwrap();
            assert!(matches!(extract_content(response), Err(ChatError::EmptyResponse)));
        }
    }

    #[tokio::test]
    async fn empty_key_is_not_configured() {
        let service =
            ChatService::new(ChatConfig::default(), SecureString::new(String::new())).unwrap();
        let result = service.try_send("hi", "").await;
        assert!(matches!(result, Err(ChatError::NotConfigured)));
        assert_eq!(service.send_message("hi", "").await, FALLBACK_REPLY);
    }
}
