//! Intents for the chat panel.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ChatIntent {
    Open,
    Close,
    /// Append a typed character to the input line.
    InputChar(char),
    Backspace,
    /// Send the input line as a question.
    Submit,
    /// An answer arrived for `request_id`.
    ReplyReceived { request_id: u64, reply: String },
    /// Spinner animation tick while waiting.
    AnimationTick,
}

impl Intent for ChatIntent {}
