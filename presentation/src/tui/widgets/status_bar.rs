//! Status bar widget — key hints and flash messages.

use crate::tui::key::Focus;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::Black).fg(Color::Gray);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let text = if let Some((ref flash, _)) = self.state.flash_message {
            flash.clone()
        } else {
            match self.state.focus() {
                Focus::Browse => {
                    "Tab:switch  1-5:jump  j/k:move  Enter:open  m:themes/books  ?:help  q:quit"
                        .into()
                }
                Focus::Quiz => "1-4:pick  j/k:move  Enter:continue  Esc:close  ?:help".into(),
                Focus::Help => "Press ? or Esc to close".into(),
            }
        };

        let style = if self.state.flash_message.is_some() {
            Style::default().fg(Color::Yellow).bg(Color::Black)
        } else {
            bg_style
        };
        let line = Line::from(Span::styled(format!(" {}", text), style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
