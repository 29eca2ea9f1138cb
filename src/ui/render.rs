use crate::content::{contact_items, experience_highlights, social_profiles, PROFILE};
use crate::rotation::{MediaStatus, Presentation};
use crate::ui::app::App;
use crate::ui::chat::render_chat_panel;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::section::Section;
use crate::ui::theme::{
    fade, ACCENT, ACCENT_SECONDARY, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Instant;

const SKILL_BAR_WIDTH: usize = 20;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.section(), app.chat_online()), header);
    frame.render_widget(Clear, body);

    let lines = match app.section() {
        Section::Hero => hero_lines(app),
        Section::Quotes => quote_lines(app, now),
        Section::Projects => project_lines(app, now),
        Section::Skills => skill_lines(app, now),
        Section::Contact => contact_lines(),
    };
    let block = Block::default()
        .title(format!(" {} ", app.section().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );

    frame.render_widget(Footer::new().widget(footer, app.chat_panel().is_visible()), footer);

    render_chat_panel(frame, app.chat_panel());
}

fn hero_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            PROFILE.name,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(PROFILE.headline, Style::default().fg(ACCENT_SECONDARY))),
        Line::from(Span::styled(PROFILE.education, Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        Line::from(Span::styled(PROFILE.summary, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
    ];

    let mut chips = Vec::new();
    for (i, area) in PROFILE.focus_areas.iter().enumerate() {
        if i > 0 {
            chips.push(Span::raw("  "));
        }
        chips.push(Span::styled(format!("[ {} ]", area), Style::default().fg(ACCENT)));
    }
    lines.push(Line::from(chips));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(STATUS_OK)),
        Span::styled(PROFILE.status, Style::default().fg(HEADER_TEXT)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.hero_quote(),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
    )));
    lines
}

fn quote_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let carousel = app.quotes();
    let (item, presentation) = carousel.presentation(now);
    let opacity = presentation.opacity;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", item.body()),
            Style::default()
                .fg(fade(HEADER_TEXT, opacity))
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    if let Some(author) = item.attribution() {
        lines.push(Line::from(Span::styled(
            format!("\u{2014} {}", author),
            Style::default().fg(fade(ACCENT, opacity)),
        )));
    }
    if let Some(status) = app.quote_media(presentation.index) {
        lines.push(media_line(status, opacity));
    }
    lines.push(Line::from(""));
    lines.push(dots_line(carousel.len(), presentation));
    lines
}

fn project_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let carousel = app.projects();
    let (project, presentation) = carousel.presentation(now);
    let opacity = presentation.opacity;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            project.title,
            Style::default()
                .fg(fade(ACCENT, opacity))
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if !project.category.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("[{}]", project.category),
            Style::default().fg(fade(ACCENT_SECONDARY, opacity)),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        project.description,
        Style::default().fg(fade(HEADER_TEXT, opacity)),
    )));
    if !project.technologies.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            project.technologies.join(" · "),
            Style::default().fg(fade(MUTED_TEXT, opacity)),
        )));
    }
    if !project.achievements.is_empty() {
        lines.push(Line::from(""));
        for achievement in project.achievements {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(fade(STATUS_OK, opacity))),
                Span::styled(*achievement, Style::default().fg(fade(HEADER_TEXT, opacity))),
            ]));
        }
    }
    if let Some(status) = app.project_media(presentation.index) {
        lines.push(media_line(status, opacity));
    }
    lines.push(Line::from(""));
    lines.push(dots_line(carousel.len(), presentation));
    lines
}

fn skill_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let carousel = app.skills();
    let (category, presentation) = carousel.presentation(now);
    let opacity = presentation.opacity;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  (avg {}%)", category.title, category.average_level()),
            Style::default()
                .fg(fade(ACCENT, opacity))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for skill in category.skills {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<24}", skill.name),
                Style::default().fg(fade(HEADER_TEXT, opacity)),
            ),
            Span::styled(
                skill_bar(skill.level),
                Style::default().fg(fade(ACCENT_SECONDARY, opacity)),
            ),
            Span::styled(
                format!(" {:>3}%", skill.level),
                Style::default().fg(fade(MUTED_TEXT, opacity)),
            ),
        ]));
    }
    lines.push(Line::from(""));

    let mut highlights = Vec::new();
    for (value, label) in experience_highlights() {
        highlights.push(Span::styled(
            format!("{} ", value),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        highlights.push(Span::styled(
            format!("{}    ", label),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    lines.push(Line::from(highlights));
    lines.push(Line::from(""));
    lines.push(dots_line(carousel.len(), presentation));
    lines
}

fn contact_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Let's build something intelligent together.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
    ];
    for item in contact_items() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>9}: ", item.label), Style::default().fg(MUTED_TEXT)),
            Span::styled(item.value, Style::default().fg(ACCENT)),
        ]));
    }
    lines.push(Line::from(""));
    let mut socials = Vec::new();
    for (i, profile) in social_profiles().iter().enumerate() {
        if i > 0 {
            socials.push(Span::styled(" · ", Style::default().fg(MUTED_TEXT)));
        }
        socials.push(Span::styled(profile.name, Style::default().fg(ACCENT_SECONDARY)));
    }
    lines.push(Line::from(socials));
    lines
}

fn media_line(status: &MediaStatus, opacity: f32) -> Line<'static> {
    let color = if status.is_available() {
        MUTED_TEXT
    } else {
        STATUS_ERROR
    };
    Line::from(Span::styled(
        format!("🖼 {}", status.caption()),
        Style::default()
            .fg(fade(color, opacity))
            .add_modifier(Modifier::DIM),
    ))
}

/// One numbered dot per item; the presented item is filled.
fn dots_line(len: usize, presentation: Presentation) -> Line<'static> {
    let mut spans = Vec::with_capacity(len * 2);
    for index in 0..len {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let (glyph, style) = if index == presentation.index {
            ("●", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        } else {
            ("○", Style::default().fg(MUTED_TEXT))
        };
        let label = if index < 9 {
            format!("{}{}", glyph, index + 1)
        } else {
            glyph.to_string()
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}

fn skill_bar(level: u8) -> String {
    let filled = (usize::from(level.min(100)) * SKILL_BAR_WIDTH + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(SKILL_BAR_WIDTH - filled)
    )
}
