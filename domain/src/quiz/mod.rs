//! Quiz domain module — the progression engine and its question model.
//!
//! One schema serves every quiz experience: `correct_option` is optional, so
//! scored walks (multiple choice, true/false) and unscored reflection walks
//! share the same [`QuestionSet`] and the same [`QuizRun`] state machine.

pub mod error;
pub mod question;
pub mod run;

pub use error::{ErrorKind, QuizError};
pub use question::{Question, QuestionKind, QuestionSet};
pub use run::{QuizPhase, QuizRun};
