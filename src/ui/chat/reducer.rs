//! Reducer for the chat panel.

use crate::chat::ChatMessage;
use crate::ui::mvi::Reducer;

use super::intent::ChatIntent;
use super::state::{ChatPanelState, MAX_INPUT_CHARS};

pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatPanelState;
    type Intent = ChatIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatIntent::Open => {
                state.visible = true;
            }

            // Transcript and any in-flight request survive closing
            ChatIntent::Close => {
                state.visible = false;
            }

            ChatIntent::InputChar(ch) => {
                if state.visible && !ch.is_control() && state.input.chars().count() < MAX_INPUT_CHARS
                {
                    state.input.push(ch);
                }
            }

            ChatIntent::Backspace => {
                state.input.pop();
            }

            ChatIntent::Submit => {
                let question = state.input.trim();
                if state.visible && state.pending.is_none() && !question.is_empty() {
                    let question = question.to_string();
                    state.input.clear();
                    state.transcript.push(ChatMessage::user(question));
                    state.pending = Some(state.next_request_id);
                    state.next_request_id += 1;
                    state.animation_tick = 0;
                }
            }

            ChatIntent::ReplyReceived { request_id, reply } => {
                if state.pending == Some(request_id) {
                    state.transcript.push(ChatMessage::assistant(reply));
                    state.pending = None;
                }
            }

            ChatIntent::AnimationTick => {
                if state.pending.is_some() {
                    state.animation_tick = state.animation_tick.wrapping_add(1);
                }
            }
        }
        state
    }
}
