//! Bottom navigation bar widget — the five tab labels.

use crate::tui::nav::NavTab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct NavBarWidget {
    active: NavTab,
}

impl NavBarWidget {
    pub fn new(active: NavTab) -> Self {
        Self { active }
    }
}

impl Widget for NavBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mut spans: Vec<Span> = Vec::new();
        for (i, tab) in NavTab::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, tab.label());
            if *tab == self.active {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    label,
                    Style::default().fg(Color::Gray).bg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(" ", bg_style));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
