//! State for the chat panel.

use crate::chat::ChatMessage;
use crate::ui::mvi::UiState;

/// Longest question accepted from the input line.
pub const MAX_INPUT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatPanelState {
    pub(super) visible: bool,
    pub(super) input: String,
    pub(super) transcript: Vec<ChatMessage>,
    /// Request awaiting an answer. At most one question is in flight.
    pub(super) pending: Option<u64>,
    pub(super) next_request_id: u64,
    pub(super) animation_tick: u8,
}

impl UiState for ChatPanelState {}

impl ChatPanelState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// The most recent question, if the last transcript entry is one.
    pub fn last_question(&self) -> Option<&str> {
        self.transcript
            .last()
            .filter(|m| m.role == crate::chat::Role::User)
            .map(|m| m.content.as_str())
    }
}
