//! Error types for the chat client.

use thiserror::Error;

/// Errors that can occur while asking the chat endpoint.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key available.
    #[error("chat API key is not configured")]
    NotConfigured,

    /// Failed to build the client or reach the endpoint.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Well-formed response without `choices[0].message.content`.
    #[error("response contained no message content")]
    EmptyResponse,
}
