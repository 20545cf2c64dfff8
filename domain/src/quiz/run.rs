//! Quiz run entity — the progression state machine
//!
//! A run is a deterministic linear walk over a [`QuestionSet`] with a
//! two-phase interaction per question: select an option, reveal the
//! feedback, advance. There is no backtracking and no branching; the only
//! exits are completing the final reveal or closing the run early.

use super::error::QuizError;
use super::question::{Question, QuestionSet};

/// Phase of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    /// Waiting for a selection on the current question.
    Answering,
    /// Feedback for the current question is showing; the selection is locked.
    Revealed,
    /// The final question passed its reveal phase. Terminal.
    Completed,
    /// Abandoned before completion. Terminal.
    Closed,
}

impl QuizPhase {
    pub fn as_str(&self) -> &str {
        match self {
            QuizPhase::Answering => "answering",
            QuizPhase::Revealed => "revealed",
            QuizPhase::Completed => "completed",
            QuizPhase::Closed => "closed",
        }
    }

    /// Whether no further transitions are accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuizPhase::Completed | QuizPhase::Closed)
    }
}

impl std::fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single quiz run (Entity).
///
/// Owns its walk state exclusively; mutation happens only through the
/// transition operations below, which report wrong-phase calls as typed
/// errors instead of clamping or guessing.
#[derive(Debug, Clone)]
pub struct QuizRun {
    set: QuestionSet,
    current_index: usize,
    selected_option: Option<usize>,
    phase: QuizPhase,
}

impl QuizRun {
    /// Begin a run at the first question with nothing selected.
    ///
    /// [`QuestionSet::new`] already rejects empty sets, so every run starts
    /// with at least one question.
    pub fn start(set: QuestionSet) -> Self {
        Self {
            set,
            current_index: 0,
            selected_option: None,
            phase: QuizPhase::Answering,
        }
    }

    pub fn set(&self) -> &QuestionSet {
        &self.set
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question at the current position. The index stays in range even
    /// after the run becomes terminal.
    pub fn current_question(&self) -> &Question {
        &self.set.questions()[self.current_index]
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn has_selection(&self) -> bool {
        self.selected_option.is_some()
    }

    /// Whether the current position is the final question.
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.set.len()
    }

    /// 1-based position and total, for the `3/10` header display.
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.set.len())
    }

    /// Display progress in `(0, 1]`; monotonically non-decreasing across a
    /// run.
    pub fn progress_fraction(&self) -> f64 {
        (self.current_index + 1) as f64 / self.set.len() as f64
    }

    /// Record a selection for the current question.
    ///
    /// Selecting after reveal is a no-op (the selection locks when the
    /// answer is checked). Fails on a terminal run or an out-of-range index.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::Completed | QuizPhase::Closed => Err(QuizError::RunFinished),
            QuizPhase::Revealed => Ok(()),
            QuizPhase::Answering => {
                let available = self.current_question().option_count();
                if index >= available {
                    return Err(QuizError::OptionOutOfRange { index, available });
                }
                self.selected_option = Some(index);
                Ok(())
            }
        }
    }

    /// The single forward-progress operation.
    ///
    /// With a selection in place: the first call reveals feedback without
    /// changing position; the second advances to the next question, or
    /// completes the run when the current question is the last.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::Completed | QuizPhase::Closed => Err(QuizError::RunFinished),
            QuizPhase::Answering => {
                if self.selected_option.is_none() {
                    return Err(QuizError::NoSelection);
                }
                self.phase = QuizPhase::Revealed;
                Ok(())
            }
            QuizPhase::Revealed => {
                if self.is_last_question() {
                    self.phase = QuizPhase::Completed;
                } else {
                    self.current_index += 1;
                    self.selected_option = None;
                    self.phase = QuizPhase::Answering;
                }
                Ok(())
            }
        }
    }

    /// Abandon the run. Valid from any phase; further transitions fail.
    pub fn close(&mut self) {
        self.phase = QuizPhase::Closed;
    }

    /// Whether the revealed selection matches the correct option.
    ///
    /// `None` before reveal, and `None` for questions without a correctness
    /// concept (reflection prompts), regardless of selection.
    pub fn is_answer_correct(&self) -> Option<bool> {
        if self.phase != QuizPhase::Revealed {
            return None;
        }
        let correct = self.current_question().correct_option?;
        let selected = self.selected_option?;
        Some(selected == correct)
    }
}
