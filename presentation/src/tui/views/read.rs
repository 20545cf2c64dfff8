//! Read view — the featured passage with per-verse focus, and suggestions.

use crate::tui::state::TuiState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let suggested_height = state.content.suggested_readings.len() as u16 + 2;
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(4),
        Constraint::Length(suggested_height),
    ])
    .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Read Scripture",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Take time to dwell in God's Word",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    render_passage(frame, chunks[1], state);
    render_suggestions(frame, chunks[2], state);
}

fn render_passage(frame: &mut Frame, area: Rect, state: &TuiState) {
    let passage = &state.content.passage;
    let mut lines = Vec::with_capacity(passage.len());

    for (i, verse) in passage.verses.iter().enumerate() {
        let focused = state.read_cursor == i;
        let pinned = state.read_selected == Some(i);

        let text_style = if pinned {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2} ", verse.number),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(verse.text.clone(), text_style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", passage.reference()));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_suggestions(frame: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = vec![Line::from(Span::styled(
        "Suggested Readings",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for reading in &state.content.suggested_readings {
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", reading.reference())),
            Span::styled(
                format!("  {}", reading.title),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
