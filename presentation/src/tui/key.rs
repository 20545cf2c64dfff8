//! Key handling — maps key events to actions based on the current focus.
//!
//! Focus follows the overlay stack: the quiz overlay captures all keys while
//! open, the help overlay above that.

use super::nav::NavTab;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Tab browsing — no overlay open.
    Browse,
    /// The quiz overlay is open.
    Quiz,
    /// The help overlay is open (above everything).
    Help,
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // -- Browse --
    /// Switch to the next tab (wrap-around)
    NextTab,
    /// Switch to the previous tab (wrap-around)
    PrevTab,
    /// Jump to a specific tab
    GoTab(NavTab),
    /// Move the active list cursor up
    CursorUp,
    /// Move the active list cursor down
    CursorDown,
    /// Activate the highlighted item (start quiz, begin reflection, ...)
    Activate,
    /// Toggle the Play view between themes and books
    ToggleCatalogMode,

    // -- Quiz overlay --
    /// Pick an option by number (0-based)
    SelectOption(usize),
    /// Move the option selection up
    SelectionUp,
    /// Move the option selection down
    SelectionDown,
    /// Check the answer / advance / finish, depending on phase
    AdvanceQuiz,
    /// Abandon the quiz
    CloseQuiz,

    // -- Global --
    /// Toggle the help overlay
    ToggleHelp,
    /// Quit the application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions for the given focus
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(focus: Focus, key: KeyEvent) -> Action {
        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match focus {
            Focus::Browse => Self::handle_browse(key),
            Focus::Quiz => Self::handle_quiz(key),
            Focus::Help => Self::handle_help(key),
        }
    }

    fn handle_browse(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,

            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Action::NextTab,
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Action::PrevTab,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                Action::GoTab(NavTab::ALL[index])
            }

            KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
            KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
            KeyCode::Enter => Action::Activate,
            KeyCode::Char('m') => Action::ToggleCatalogMode,

            _ => Action::None,
        }
    }

    fn handle_quiz(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseQuiz,
            KeyCode::Char('?') => Action::ToggleHelp,

            // Options are numbered from 1 in the overlay
            KeyCode::Char(c @ '1'..='9') => {
                Action::SelectOption(c as usize - '1' as usize)
            }
            KeyCode::Char('k') | KeyCode::Up => Action::SelectionUp,
            KeyCode::Char('j') | KeyCode::Down => Action::SelectionDown,
            KeyCode::Enter | KeyCode::Char(' ') => Action::AdvanceQuiz,

            _ => Action::None,
        }
    }

    fn handle_help(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                Action::ToggleHelp
            }
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(Focus::Browse, ctrl_c), Action::Quit);
        assert_eq!(KeyHandler::handle(Focus::Quiz, ctrl_c), Action::Quit);
        assert_eq!(KeyHandler::handle(Focus::Help, ctrl_c), Action::Quit);
    }

    #[test]
    fn test_browse_tab_switching() {
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Tab)),
            Action::NextTab
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::BackTab)),
            Action::PrevTab
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('l'))),
            Action::NextTab
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('h'))),
            Action::PrevTab
        );
    }

    #[test]
    fn test_browse_tab_jump() {
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('1'))),
            Action::GoTab(NavTab::Home)
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('5'))),
            Action::GoTab(NavTab::Profile)
        );
    }

    #[test]
    fn test_browse_cursor_and_activate() {
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('j'))),
            Action::CursorDown
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Up)),
            Action::CursorUp
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Enter)),
            Action::Activate
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('m'))),
            Action::ToggleCatalogMode
        );
    }

    #[test]
    fn test_browse_quit_and_help() {
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('q'))),
            Action::Quit
        );
        assert_eq!(
            KeyHandler::handle(Focus::Browse, key(KeyCode::Char('?'))),
            Action::ToggleHelp
        );
    }

    #[test]
    fn test_quiz_option_numbers_are_zero_based() {
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Char('1'))),
            Action::SelectOption(0)
        );
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Char('4'))),
            Action::SelectOption(3)
        );
    }

    #[test]
    fn test_quiz_advance_and_close() {
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Enter)),
            Action::AdvanceQuiz
        );
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Char(' '))),
            Action::AdvanceQuiz
        );
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Esc)),
            Action::CloseQuiz
        );
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Char('q'))),
            Action::CloseQuiz
        );
    }

    #[test]
    fn test_quiz_selection_movement() {
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Char('j'))),
            Action::SelectionDown
        );
        assert_eq!(
            KeyHandler::handle(Focus::Quiz, key(KeyCode::Up)),
            Action::SelectionUp
        );
    }

    #[test]
    fn test_quiz_does_not_switch_tabs() {
        assert_eq!(KeyHandler::handle(Focus::Quiz, key(KeyCode::Tab)), Action::None);
    }

    #[test]
    fn test_help_closes_on_common_keys() {
        for code in [
            KeyCode::Char('?'),
            KeyCode::Esc,
            KeyCode::Char('q'),
            KeyCode::Enter,
        ] {
            assert_eq!(KeyHandler::handle(Focus::Help, key(code)), Action::ToggleHelp);
        }
        assert_eq!(
            KeyHandler::handle(Focus::Help, key(KeyCode::Char('x'))),
            Action::None
        );
    }
}
