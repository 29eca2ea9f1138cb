use crate::content::PROFILE;
use crate::ui::section::Section;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Name, section tabs and assistant status.
    pub fn widget(&self, active: Section, chat_online: bool) -> Paragraph<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled(
                format!("  {}", PROFILE.name),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │ ", separator_style),
        ];

        for section in Section::ALL {
            let style = if section == active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(format!(" {} ", section.title()), style));
        }

        let (dot, label, color) = if chat_online {
            ("●", "AI online", STATUS_OK)
        } else {
            ("●", "AI offline", STATUS_ERROR)
        };
        spans.push(Span::styled(" │  ", separator_style));
        spans.push(Span::styled(dot, Style::default().fg(color)));
        spans.push(Span::styled(format!(" {}", label), Style::default().fg(HEADER_TEXT)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
