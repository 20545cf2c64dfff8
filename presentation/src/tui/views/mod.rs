//! View rendering — one renderer per tab, plus the overlays.

pub mod home;
pub mod paths;
pub mod play;
pub mod profile;
pub mod quiz;
pub mod read;

use super::nav::NavTab;
use super::state::TuiState;
use super::widgets::{NavBarWidget, StatusBarWidget};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the whole frame: active view, nav bar, status bar, overlays.
pub fn render(frame: &mut Frame, state: &TuiState) {
    let show_status = state.show_hints || state.flash_message.is_some();
    let status_height = if show_status { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(status_height),
    ])
    .split(frame.area());

    match state.active_tab {
        NavTab::Home => home::render(frame, chunks[0], state),
        NavTab::Play => play::render(frame, chunks[0], state),
        NavTab::Paths => paths::render(frame, chunks[0], state),
        NavTab::Read => read::render(frame, chunks[0], state),
        NavTab::Profile => profile::render(frame, chunks[0], state),
    }

    frame.render_widget(NavBarWidget::new(state.active_tab), chunks[1]);
    if show_status {
        frame.render_widget(StatusBarWidget::new(state), chunks[2]);
    }

    // Overlays, bottom to top
    if let Some(session) = &state.quiz {
        quiz::render(frame, frame.area(), session);
    }
    if state.show_help {
        let area = centered_overlay(70, 70, frame.area());
        frame.render_widget(Clear, area);
        render_help(frame, area);
    }
}

/// A centered rect taking the given percentages of the parent area.
pub(crate) fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}

fn render_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Browsing:"),
        Line::from("  Tab/Shift+Tab  Next / previous tab"),
        Line::from("  1-5            Jump to tab"),
        Line::from("  j/k            Move in the current list"),
        Line::from("  Enter          Open the highlighted item"),
        Line::from("  m              Play: toggle themes / books"),
        Line::from("  q, Ctrl+C      Quit"),
        Line::from(""),
        Line::from("In a quiz:"),
        Line::from("  1-4            Pick an option"),
        Line::from("  j/k            Move the selection"),
        Line::from("  Enter          Check answer, then continue"),
        Line::from("  Esc            Close the quiz"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
