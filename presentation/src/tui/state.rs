//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Content is
//! snapshotted from the provider ports at startup (it is static for the
//! process lifetime); the quiz overlay owns a live `QuizRun`.

use super::key::Focus;
use super::nav::NavTab;
use selah_domain::{
    DailyVerse, JourneyHighlight, JourneyStat, Milestone, Passage, QuizMode, QuizPhase, QuizRun,
    SpiritualPath, SuggestedReading, TopicInfo,
};
use std::time::Instant;

/// How long a flash message stays visible.
pub const FLASH_TTL_MS: u128 = 2_500;

/// Where the active quiz was launched from. Decides the footer wording:
/// the daily reflection keeps its gentler labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOrigin {
    DailyReflection,
    Topic,
}

/// The live quiz overlay: a run plus its display title.
pub struct QuizSession {
    pub run: QuizRun,
    pub title: String,
    pub origin: QuizOrigin,
}

impl QuizSession {
    pub fn new(run: QuizRun, title: impl Into<String>, origin: QuizOrigin) -> Self {
        Self {
            run,
            title: title.into(),
            origin,
        }
    }

    /// Footer button label for the current phase.
    pub fn footer_label(&self) -> &'static str {
        match (self.origin, self.run.phase()) {
            (QuizOrigin::DailyReflection, QuizPhase::Completed) => "Complete",
            (QuizOrigin::Topic, QuizPhase::Completed) => "Continue Your Journey",
            (QuizOrigin::DailyReflection, QuizPhase::Answering) => "Continue",
            (QuizOrigin::DailyReflection, _) => {
                if self.run.is_last_question() {
                    "Finish Reflection"
                } else {
                    "Next Question"
                }
            }
            (QuizOrigin::Topic, QuizPhase::Answering) => "Check Answer",
            (QuizOrigin::Topic, _) => {
                if self.run.is_last_question() {
                    "See Results"
                } else {
                    "Next Question"
                }
            }
        }
    }
}

/// Immutable content snapshot the views render from.
pub struct ContentSnapshot {
    pub daily_verse: DailyVerse,
    pub theme_topics: Vec<TopicInfo>,
    pub book_topics: Vec<TopicInfo>,
    pub paths: Vec<SpiritualPath>,
    pub passage: Passage,
    pub suggested_readings: Vec<SuggestedReading>,
    pub milestones: Vec<Milestone>,
    pub highlights: Vec<JourneyHighlight>,
    pub stats: Vec<JourneyStat>,
}

/// Central TUI state — owned by the TuiApp event loop
pub struct TuiState {
    pub content: ContentSnapshot,

    // -- Navigation --
    pub active_tab: NavTab,

    // -- Per-view cursors --
    /// Home: 0 = reflection card, 1.. = path cards.
    pub home_cursor: usize,
    pub play_mode: QuizMode,
    pub play_cursor: usize,
    pub paths_cursor: usize,
    /// Read: focused verse (0-based into the passage).
    pub read_cursor: usize,
    /// Read: verse pinned with Enter, if any.
    pub read_selected: Option<usize>,

    // -- Overlays --
    pub quiz: Option<QuizSession>,
    pub show_help: bool,

    // -- Chrome --
    pub show_hints: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(content: ContentSnapshot) -> Self {
        Self {
            content,
            active_tab: NavTab::Home,
            home_cursor: 0,
            play_mode: QuizMode::Theme,
            play_cursor: 0,
            paths_cursor: 0,
            read_cursor: 0,
            read_selected: None,
            quiz: None,
            show_help: false,
            show_hints: true,
            flash_message: None,
            should_quit: false,
        }
    }

    /// Current keyboard focus, following the overlay stack.
    pub fn focus(&self) -> Focus {
        if self.show_help {
            Focus::Help
        } else if self.quiz.is_some() {
            Focus::Quiz
        } else {
            Focus::Browse
        }
    }

    // -- Navigation --

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    pub fn goto_tab(&mut self, tab: NavTab) {
        self.active_tab = tab;
    }

    // -- Catalog browsing --

    /// Topic rows for the active Play sub-tab.
    pub fn play_topics(&self) -> &[TopicInfo] {
        match self.play_mode {
            QuizMode::Theme => &self.content.theme_topics,
            QuizMode::Book => &self.content.book_topics,
        }
    }

    /// The highlighted Play row.
    pub fn selected_topic(&self) -> Option<&TopicInfo> {
        self.play_topics().get(self.play_cursor)
    }

    pub fn toggle_play_mode(&mut self) {
        self.play_mode = match self.play_mode {
            QuizMode::Theme => QuizMode::Book,
            QuizMode::Book => QuizMode::Theme,
        };
        self.play_cursor = 0;
    }

    // -- Cursor movement --

    /// Number of selectable rows in the active view.
    fn cursor_len(&self) -> usize {
        match self.active_tab {
            NavTab::Home => 1 + self.content.paths.len(),
            NavTab::Play => self.play_topics().len(),
            NavTab::Paths => self.content.paths.len(),
            NavTab::Read => self.content.passage.len(),
            NavTab::Profile => 0,
        }
    }

    fn active_cursor_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            NavTab::Home => Some(&mut self.home_cursor),
            NavTab::Play => Some(&mut self.play_cursor),
            NavTab::Paths => Some(&mut self.paths_cursor),
            NavTab::Read => Some(&mut self.read_cursor),
            NavTab::Profile => None,
        }
    }

    pub fn cursor_up(&mut self) {
        if let Some(cursor) = self.active_cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.cursor_len();
        if let Some(cursor) = self.active_cursor_mut()
            && len > 0
            && *cursor + 1 < len
        {
            *cursor += 1;
        }
    }

    // -- Flash messages --

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    /// Drop the flash once its time is up. Called on every tick.
    pub fn expire_flash(&mut self) {
        let expired = self
            .flash_message
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed().as_millis() > FLASH_TTL_MS);
        if expired {
            self.flash_message = None;
        }
    }
}
