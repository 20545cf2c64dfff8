//! Question source port.
//!
//! The catalog of question sets lives behind this trait so the content can
//! come from the built-in tables, TOML packs, or test stubs without the use
//! cases knowing the difference. All operations are synchronous: sources
//! resolve from data assembled at startup and perform no I/O at query time.

use selah_domain::{QuestionSet, QuizMode, TopicInfo, TopicKey};
use thiserror::Error;

/// Errors from question set resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("no question set for topic '{topic}'")]
    TopicNotFound { topic: String },
}

/// Port for resolving question sets and browsing the catalog.
pub trait QuestionSourcePort: Send + Sync {
    /// Resolve the question set for a topic, or `TopicNotFound`.
    ///
    /// Resolution is a hard error here; falling back to a default topic is
    /// the caller's policy, not the source's.
    fn question_set(&self, topic: &TopicKey) -> Result<QuestionSet, SourceError>;

    /// The daily reflection walk launched from the Home view.
    fn daily_reflection(&self) -> QuestionSet;

    /// Catalog rows for one browse mode, in display order. Locked topics
    /// are included; playability is the shell's concern.
    fn topics(&self, mode: QuizMode) -> Vec<TopicInfo>;
}
