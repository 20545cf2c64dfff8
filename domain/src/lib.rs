//! Domain layer for selah
//!
//! This crate contains the core entities and the quiz progression engine.
//! It has no dependencies on infrastructure or presentation concerns — no
//! I/O, no async, no rendering.
//!
//! # Core Concepts
//!
//! ## Quiz run
//!
//! A [`QuizRun`] walks a [`QuestionSet`] front to back with a two-phase
//! interaction per question:
//!
//! - **Answering**: the user picks an option (re-picking is allowed)
//! - **Revealed**: feedback is showing and the selection is locked
//!
//! A single `advance` operation drives both transitions; the run completes
//! after the final question's reveal phase or closes on abandonment.
//!
//! ## Topics
//!
//! Question sets are keyed by [`TopicKey`] — a theme (faith, hope, ...) or a
//! book (Genesis, Psalms, ...). Providers own the catalog; the engine never
//! sees topic resolution.

pub mod journey;
pub mod quiz;
pub mod reading;
pub mod topic;
pub mod util;

// Re-export commonly used types
pub use journey::{DailyVerse, JourneyHighlight, JourneyStat, Milestone, SpiritualPath};
pub use quiz::{ErrorKind, Question, QuestionKind, QuestionSet, QuizError, QuizPhase, QuizRun};
pub use reading::{Passage, PassageVerse, SuggestedReading};
pub use topic::{QuizMode, TopicInfo, TopicKey};
