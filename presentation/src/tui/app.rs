//! TUI application — terminal lifecycle and the main event loop.
//!
//! The engine is synchronous, so every user intent is applied inline:
//! key event → [`Action`] → engine transition → redraw. The loop itself is
//! async only to multiplex the crossterm event stream with the tick that
//! expires flash messages.

use super::key::{Action, Focus, KeyHandler};
use super::nav::NavTab;
use super::state::{ContentSnapshot, QuizOrigin, QuizSession, TuiState};
use super::views;
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use selah_application::{
    BeginReflectionUseCase, DevotionalLibraryPort, QuestionSourcePort, StartQuizInput,
    StartQuizUseCase,
};
use selah_domain::{ErrorKind, QuizMode, QuizPhase, TopicKey};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Launch options resolved from CLI flags and config.
pub struct TuiOptions {
    pub start_tab: NavTab,
    pub show_hints: bool,
    /// Fallback topics, per browse mode (config `[quiz]`).
    pub theme_fallback: TopicKey,
    pub book_fallback: TopicKey,
    /// Open this topic's quiz immediately on launch (`--theme` / `--book`).
    pub initial_topic: Option<TopicKey>,
}

/// Main TUI application
pub struct TuiApp<S: QuestionSourcePort> {
    state: TuiState,
    start_quiz: StartQuizUseCase<S>,
    begin_reflection: BeginReflectionUseCase<S>,
    theme_fallback: TopicKey,
    book_fallback: TopicKey,
}

impl<S: QuestionSourcePort> TuiApp<S> {
    pub fn new<L>(source: Arc<S>, library: &L, options: TuiOptions) -> Self
    where
        L: DevotionalLibraryPort + ?Sized,
    {
        let content = ContentSnapshot {
            daily_verse: library.daily_verse(),
            theme_topics: source.topics(QuizMode::Theme),
            book_topics: source.topics(QuizMode::Book),
            paths: library.paths(),
            passage: library.featured_passage(),
            suggested_readings: library.suggested_readings(),
            milestones: library.milestones(),
            highlights: library.highlights(),
            stats: library.stats(),
        };

        let mut state = TuiState::new(content);
        state.active_tab = options.start_tab;
        state.show_hints = options.show_hints;

        let mut app = Self {
            state,
            start_quiz: StartQuizUseCase::new(source.clone()),
            begin_reflection: BeginReflectionUseCase::new(source),
            theme_fallback: options.theme_fallback,
            book_fallback: options.book_fallback,
        };

        if let Some(topic) = options.initial_topic {
            app.launch_topic_quiz(topic);
        }
        app
    }

    /// Run the TUI main loop until quit.
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        let result = loop {
            terminal.draw(|frame| views::render(frame, &self.state))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => break Err(err),
                        None => break Ok(()),
                    }
                }
                _ = tick.tick() => {
                    self.state.expire_flash();
                }
            }

            if self.state.should_quit {
                break Ok(());
            }
        };

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let action = KeyHandler::handle(self.state.focus(), key);
        self.apply(action);
    }

    /// Apply a user action to the state. Separated from the event loop so
    /// the full intent surface is testable without a terminal.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,

            Action::NextTab => self.state.next_tab(),
            Action::PrevTab => self.state.prev_tab(),
            Action::GoTab(tab) => self.state.goto_tab(tab),
            Action::CursorUp => self.state.cursor_up(),
            Action::CursorDown => self.state.cursor_down(),
            Action::ToggleCatalogMode => {
                if self.state.active_tab == NavTab::Play {
                    self.state.toggle_play_mode();
                }
            }
            Action::Activate => self.activate(),

            Action::SelectOption(index) => self.quiz_select(index),
            Action::SelectionUp => self.quiz_move(-1),
            Action::SelectionDown => self.quiz_move(1),
            Action::AdvanceQuiz => self.quiz_advance(),
            Action::CloseQuiz => self.quiz_close(),

            Action::None => {}
        }
    }

    /// Current focus — used by tests to confirm overlay routing.
    pub fn focus(&self) -> Focus {
        self.state.focus()
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    // -- Browse intents --

    fn activate(&mut self) {
        match self.state.active_tab {
            NavTab::Home => {
                if self.state.home_cursor == 0 {
                    self.launch_reflection();
                } else {
                    let index = self.state.home_cursor - 1;
                    self.activate_path(index);
                }
            }
            NavTab::Play => {
                let Some(topic) = self.state.selected_topic() else {
                    return;
                };
                if topic.locked {
                    self.state.flash("Go Premium to unlock this topic");
                } else {
                    self.launch_topic_quiz(topic.key.clone());
                }
            }
            NavTab::Paths => {
                let index = self.state.paths_cursor;
                self.activate_path(index);
            }
            NavTab::Read => {
                // Pin / unpin the focused verse
                let cursor = self.state.read_cursor;
                self.state.read_selected = if self.state.read_selected == Some(cursor) {
                    None
                } else {
                    Some(cursor)
                };
            }
            NavTab::Profile => {}
        }
    }

    fn activate_path(&mut self, index: usize) {
        let Some(path) = self.state.content.paths.get(index) else {
            return;
        };
        if path.locked {
            self.state.flash("Premium paths are part of Go Deeper");
        } else {
            // Path cards open the guided reflection walk.
            self.launch_reflection();
        }
    }

    fn launch_reflection(&mut self) {
        let run = self.begin_reflection.execute();
        let title = run.set().title().to_string();
        self.state.quiz = Some(QuizSession::new(run, title, QuizOrigin::DailyReflection));
    }

    fn launch_topic_quiz(&mut self, topic: TopicKey) {
        let fallback = match topic.mode() {
            QuizMode::Theme => self.theme_fallback.clone(),
            QuizMode::Book => self.book_fallback.clone(),
        };
        let input = StartQuizInput::new(topic).with_fallback(fallback);
        match self.start_quiz.execute(input) {
            Ok(output) => {
                if output.fell_back {
                    self.state.flash(format!(
                        "Topic unavailable, starting {}",
                        output.topic.display_name()
                    ));
                }
                let title = output.run.set().title().to_string();
                self.state.quiz = Some(QuizSession::new(output.run, title, QuizOrigin::Topic));
            }
            Err(err) => self.state.flash(err.to_string()),
        }
    }

    // -- Quiz intents --

    fn quiz_select(&mut self, index: usize) {
        let Some(session) = &mut self.state.quiz else {
            return;
        };
        if let Err(err) = session.run.select_option(index) {
            // Out-of-range picks get surfaced; wrong-phase presses are the
            // locked/finished states where the control is simply inert.
            if err.kind() == ErrorKind::InvalidInput {
                self.state.flash(err.to_string());
            } else {
                debug!(%err, "ignored selection in terminal phase");
            }
        }
    }

    fn quiz_move(&mut self, delta: isize) {
        let Some(session) = &mut self.state.quiz else {
            return;
        };
        if session.run.phase() != QuizPhase::Answering {
            return;
        }
        let count = session.run.current_question().option_count();
        let current = session.run.selected_option();
        let next = match (current, delta) {
            (None, _) => 0,
            (Some(i), d) if d < 0 => i.saturating_sub(1),
            (Some(i), _) => (i + 1).min(count - 1),
        };
        // In range by construction
        let _ = session.run.select_option(next);
    }

    fn quiz_advance(&mut self) {
        let Some(session) = &mut self.state.quiz else {
            return;
        };
        match session.run.phase() {
            QuizPhase::Completed | QuizPhase::Closed => {
                self.state.quiz = None;
            }
            _ => {
                if !session.run.has_selection() {
                    // Keep the advance control disabled until a pick exists.
                    self.state.flash("Pick an option first");
                    return;
                }
                if let Err(err) = session.run.advance() {
                    self.state.flash(err.to_string());
                }
            }
        }
    }

    fn quiz_close(&mut self) {
        if let Some(session) = &mut self.state.quiz {
            session.run.close();
            self.state.quiz = None;
        }
    }
}
