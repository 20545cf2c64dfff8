//! Profile view — journey highlights, stats, and static menu rows.

use crate::tui::state::TuiState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const MENU_ITEMS: &[(&str, &str)] = &[
    ("Gentle Reminders", "Optional daily invitation"),
    ("Support the Mission", "Help others discover faith"),
    ("Share with Friends", "Invite someone on this journey"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Your Journey",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Growing in faith, at your pace",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    // Stats row
    let mut stat_spans: Vec<Span> = Vec::new();
    for stat in &state.content.stats {
        stat_spans.push(Span::styled(
            format!("{} ", stat.value),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        stat_spans.push(Span::styled(
            format!("{}   ", stat.label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(stat_spans));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Your Spiritual Journey",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for highlight in &state.content.highlights {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", highlight.title)),
            Span::styled(
                format!("  {}", highlight.description),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "This journey is personal. Take each step at your own pace, without pressure or comparison.",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));

    for (label, description) in MENU_ITEMS {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", label)),
            Span::styled(
                format!("  {}", description),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Go Deeper - unlock all spiritual paths, deeper reflections, and extended content",
        Style::default().fg(Color::Magenta),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
