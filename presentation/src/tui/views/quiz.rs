//! Quiz overlay — full-screen walk through a question set.
//!
//! Renders whatever phase the run is in; every transition happens in the
//! app's action handler, never here.

use crate::tui::state::{QuizOrigin, QuizSession};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};
use selah_domain::{QuestionKind, QuizPhase};

pub fn render(frame: &mut Frame, area: Rect, session: &QuizSession) {
    frame.render_widget(Clear, area);

    if session.run.phase() == QuizPhase::Completed {
        render_complete(frame, area, session);
        return;
    }

    let question = session.run.current_question();
    let revealed = session.run.phase() == QuizPhase::Revealed;
    let option_lines = question.options.len() as u16;
    let feedback_height = if revealed { 6 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),               // header
        Constraint::Length(1),               // progress gauge
        Constraint::Length(1),               // kind badge
        Constraint::Length(4),               // verse
        Constraint::Length(2),               // prompt
        Constraint::Length(option_lines),    // options
        Constraint::Length(feedback_height), // feedback
        Constraint::Min(0),                  // spacer
        Constraint::Length(1),               // footer
    ])
    .split(area);

    render_header(frame, chunks[0], session);
    render_gauge(frame, chunks[1], session);
    render_badge(frame, chunks[2], question.kind);
    render_verse(frame, chunks[3], question);
    render_prompt(frame, chunks[4], question);
    render_options(frame, chunks[5], session);
    if revealed {
        render_feedback(frame, chunks[6], session);
    }
    render_footer(frame, chunks[8], session);
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let (position, total) = session.run.position();
    let line = Line::from(vec![
        Span::styled("[Esc] close", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(
            session.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}/{}", position, total),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_gauge(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::DarkGray))
        .ratio(session.run.progress_fraction())
        .label("");
    frame.render_widget(gauge, area);
}

fn render_badge(frame: &mut Frame, area: Rect, kind: QuestionKind) {
    let color = match kind {
        QuestionKind::MultipleChoice => Color::Yellow,
        QuestionKind::TrueFalse => Color::Green,
        QuestionKind::Reflection => Color::Magenta,
    };
    let line = Line::from(Span::styled(
        format!(" {} ", kind.display_name()),
        Style::default().fg(Color::Black).bg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_verse(frame: &mut Frame, area: Rect, question: &selah_domain::Question) {
    let lines = vec![
        Line::from(Span::styled(
            format!("\"{}\"", question.verse),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("- {}", question.reference),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default().borders(Borders::LEFT);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_prompt(frame: &mut Frame, area: Rect, question: &selah_domain::Question) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let question = session.run.current_question();
    let revealed = session.run.phase() == QuizPhase::Revealed;
    let selected = session.run.selected_option();

    let mut lines = Vec::with_capacity(question.options.len());
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(i);
        let is_correct = question.kind.is_scored() && question.correct_option == Some(i);

        let marker = if is_selected { "\u{25b8}" } else { " " };
        let style = if revealed {
            // Highlight the pick warmly, show the correct row gently, dim
            // the rest. Reflection rows keep only the pick highlight.
            if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if is_correct {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled(
            format!("{} {}. {}", marker, i + 1, option),
            style,
        )];
        if revealed && is_correct {
            spans.push(Span::styled("  *", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let question = session.run.current_question();
    let mut lines = Vec::new();

    match session.run.is_answer_correct() {
        Some(true) => lines.push(Line::from(Span::styled(
            "Great insight!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        Some(false) => lines.push(Line::from(Span::styled(
            "Here's another perspective",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))),
        None => {}
    }

    lines.push(Line::from(question.explanation.clone()));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "For reflection: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            question.follow_up.clone(),
            Style::default().fg(Color::Gray),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_footer(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let enabled = session.run.has_selection();
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", session.footer_label()), style),
        Span::styled(
            if enabled { "  (Enter)" } else { "  pick an option first" },
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_complete(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let message = match session.origin {
        QuizOrigin::DailyReflection => {
            "You've taken time to connect with Scripture today. May these words stay with you."
                .to_string()
        }
        QuizOrigin::Topic => format!(
            "You've explored {} with an open heart. May these truths stay with you today.",
            session.title
        ),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "\u{2713}",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Beautiful Reflection",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(message).centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", session.footer_label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Span::styled("(Enter)", Style::default().fg(Color::DarkGray)).into_centered_line(),
    ];

    let overlay = super::centered_overlay(70, 60, area);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        overlay,
    );
}
