//! Home view — milestones, today's reflection, and path shortcuts.

use crate::tui::state::TuiState;
use crate::tui::widgets::meter;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use selah_domain::util::truncate;

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // greeting
        Constraint::Length(2), // milestones
        Constraint::Length(7), // reflection card
        Constraint::Min(0),    // paths
    ])
    .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome back",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Continue in peace",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(greeting, chunks[0]);

    render_milestones(frame, chunks[1], state);
    render_reflection_card(frame, chunks[2], state);
    render_paths(frame, chunks[3], state);
}

fn render_milestones(frame: &mut Frame, area: Rect, state: &TuiState) {
    let mut spans: Vec<Span> = Vec::new();
    for milestone in &state.content.milestones {
        let (marker, style) = if milestone.achieved {
            ("[x]", Style::default().fg(Color::Green))
        } else {
            ("[ ]", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{} {}  ", marker, milestone.label), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_reflection_card(frame: &mut Frame, area: Rect, state: &TuiState) {
    let verse = &state.content.daily_verse;
    let selected = state.home_cursor == 0;

    let button_style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("\"{}\"", verse.verse),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("- {}", verse.reference),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(" Begin Reflection ", button_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Today's Reflection - {} ", verse.theme))
        .border_style(if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_paths(frame: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = vec![Line::from(Span::styled(
        "Your Spiritual Paths",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (i, path) in state.content.paths.iter().enumerate() {
        let selected = state.home_cursor == i + 1;
        let marker = if selected { "\u{25b8} " } else { "  " };
        let mut title_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if path.locked {
            title_style = title_style.fg(Color::DarkGray);
        }

        let suffix = if path.locked { "  (premium)" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{} {}{}", marker, path.emblem, path.title, suffix), title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                meter(path.progress_percent(), 12),
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
