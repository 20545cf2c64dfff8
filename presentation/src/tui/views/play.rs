//! Play view — the topic catalog, browsed by theme or by book.

use crate::tui::state::TuiState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use selah_domain::QuizMode;

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Play",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Choose your journey",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    // Sub-tab selector
    let mut selector: Vec<Span> = Vec::new();
    for mode in [QuizMode::Theme, QuizMode::Book] {
        let style = if mode == state.play_mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        selector.push(Span::styled(format!(" {} ", mode.display_name()), style));
        selector.push(Span::raw(" "));
    }
    selector.push(Span::styled("(m to switch)", Style::default().fg(Color::DarkGray)));
    lines.push(Line::from(selector));

    lines.push(Line::from(Span::styled(
        match state.play_mode {
            QuizMode::Theme => "Explore Scripture through life themes and emotions",
            QuizMode::Book => "Dive deep into individual books of the Bible",
        },
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    for (i, topic) in state.play_topics().iter().enumerate() {
        let selected = state.play_cursor == i;
        let marker = if selected { "\u{25b8} " } else { "  " };

        let name_style = if topic.locked {
            Style::default().fg(Color::DarkGray)
        } else if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(format!("{}{}", marker, topic.name), name_style),
            Span::styled(
                format!("  {} questions", topic.question_count),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if topic.locked {
            spans.push(Span::styled(
                "  [locked]",
                Style::default().fg(Color::Magenta),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Unlock All Content - access to all books, themes, and deeper reflections",
        Style::default().fg(Color::Magenta),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
