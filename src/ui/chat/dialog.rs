//! Dialog rendering for the chat panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::chat::{ChatMessage, Role};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_OK};

use super::state::ChatPanelState;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const DIALOG_WIDTH: u16 = 70;
const DIALOG_HEIGHT: u16 = 20;

const GREETING: &str = "Ask me anything about Harish's projects, skills or experience.";

/// Render the chat panel overlay.
pub fn render_chat_panel(frame: &mut Frame, state: &ChatPanelState) {
    if !state.is_visible() {
        return;
    }

    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" AI Assistant ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let transcript_area = Rect {
        height: inner.height - 2,
        ..inner
    };
    let input_area = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };

    let lines = transcript_lines(state);
    // Keep the newest lines in view
    let scroll = lines.len().saturating_sub(transcript_area.height as usize) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        transcript_area,
    );

    frame.render_widget(Paragraph::new(input_line(state)), input_area);
}

fn transcript_lines(state: &ChatPanelState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if state.transcript().is_empty() {
        lines.push(Line::from(Span::styled(
            GREETING,
            Style::default().fg(MUTED_TEXT),
        )));
    }
    for message in state.transcript() {
        lines.push(message_line(message));
        lines.push(Line::from(""));
    }
    if state.is_waiting() {
        let spinner = SPINNER_FRAMES[(state.animation_tick() as usize) % SPINNER_FRAMES.len()];
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Thinking...", Style::default().fg(MUTED_TEXT)),
        ]));
    }
    lines
}

fn message_line(message: &ChatMessage) -> Line<'static> {
    let (label, label_style) = match message.role {
        Role::User => ("You: ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Role::Assistant | Role::System => (
            "AI: ",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        ),
    };
    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(message.content.clone(), Style::default().fg(HEADER_TEXT)),
    ])
}

fn input_line(state: &ChatPanelState) -> Line<'static> {
    let hint = if state.is_waiting() { "waiting" } else { "Enter: send" };
    Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::styled(state.input().to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("▏", Style::default().fg(ACCENT)),
        Span::styled(
            format!("  ({} │ Esc: close)", hint),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::chat::{ChatIntent, ChatReducer};
    use crate::ui::mvi::Reducer;

    #[test]
    fn empty_transcript_shows_greeting() {
        let state = ChatReducer::reduce(ChatPanelState::default(), ChatIntent::Open);
        let lines = transcript_lines(&state);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, GREETING);
    }

    #[test]
    fn waiting_adds_spinner_line() {
        let state = [
            ChatIntent::Open,
            ChatIntent::InputChar('?'),
            ChatIntent::Submit,
        ]
        .into_iter()
        .fold(ChatPanelState::default(), ChatReducer::reduce);
        let lines = transcript_lines(&state);
        let last = lines.last().unwrap();
        assert!(last.spans[1].content.contains("Thinking"));
    }
}
