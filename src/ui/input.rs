use crate::ui::app::{App, ChatRequest};
use crate::ui::chat::ChatIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Send a question to the chat client.
    SendChat(ChatRequest),
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if app.chat_panel().is_visible() {
        return handle_chat_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('c') => app.open_chat(),
        KeyCode::Tab => app.next_section(now),
        KeyCode::BackTab => app.prev_section(now),
        KeyCode::Right => app.step_item(1, now),
        KeyCode::Left => app.step_item(-1, now),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.select_item(index, now);
        }
        _ => {}
    }
    InputAction::None
}

fn handle_chat_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => app.close_chat(),
        KeyCode::Enter => {
            if let Some(request) = app.submit_chat() {
                return InputAction::SendChat(request);
            }
        }
        KeyCode::Backspace => app.dispatch_chat(ChatIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_chat(ChatIntent::InputChar(ch));
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
