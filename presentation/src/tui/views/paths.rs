//! Paths view — every spiritual path with lesson progress.

use crate::tui::state::TuiState;
use crate::tui::widgets::meter;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use selah_domain::util::truncate;

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Spiritual Paths",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Choose a journey that speaks to your heart",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let mut premium_header_done = false;
    for (i, path) in state.content.paths.iter().enumerate() {
        if path.locked && !premium_header_done {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Premium Journeys",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
            premium_header_done = true;
        }

        let selected = state.paths_cursor == i;
        let marker = if selected { "\u{25b8} " } else { "  " };
        let mut title_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if path.locked {
            title_style = title_style.fg(Color::DarkGray);
        }

        let mut title_spans = vec![Span::styled(
            format!("{}{} {}", marker, path.emblem, path.title),
            title_style,
        )];
        if path.is_complete() {
            title_spans.push(Span::styled("  [done]", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(title_spans));

        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                meter(path.progress_percent(), 16),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  {}", path.lessons_caption()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", truncate(&path.description, 70)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
