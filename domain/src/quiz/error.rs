//! Quiz engine error types

use thiserror::Error;

/// Coarse classification of engine failures.
///
/// `InvalidInput` covers malformed data handed to the engine; a
/// `PreconditionViolation` is a transition invoked in the wrong phase and
/// signals a caller bug — the shell disables the offending control, so this
/// class is unreachable under correct usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    PreconditionViolation,
}

/// Errors surfaced by the quiz progression engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("question set '{set}' has no questions")]
    EmptySet { set: String },

    #[error("question {question} in set '{set}' has no options")]
    NoOptions { set: String, question: u32 },

    #[error(
        "question {question} in set '{set}': correct option {index} out of range ({available} options)"
    )]
    CorrectOptionOutOfRange {
        set: String,
        question: u32,
        index: usize,
        available: usize,
    },

    #[error("option {index} out of range (current question has {available} options)")]
    OptionOutOfRange { index: usize, available: usize },

    #[error("cannot advance without a selected option")]
    NoSelection,

    #[error("quiz run is already finished")]
    RunFinished,
}

impl QuizError {
    /// Classify this error per the engine's failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::EmptySet { .. }
            | QuizError::NoOptions { .. }
            | QuizError::CorrectOptionOutOfRange { .. }
            | QuizError::OptionOutOfRange { .. } => ErrorKind::InvalidInput,
            QuizError::NoSelection | QuizError::RunFinished => ErrorKind::PreconditionViolation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_kind() {
        let err = QuizError::EmptySet { set: "Faith".into() };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = QuizError::OptionOutOfRange {
            index: 5,
            available: 2,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_precondition_violation_kind() {
        assert_eq!(
            QuizError::NoSelection.kind(),
            ErrorKind::PreconditionViolation
        );
        assert_eq!(
            QuizError::RunFinished.kind(),
            ErrorKind::PreconditionViolation
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = QuizError::OptionOutOfRange {
            index: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "option 5 out of range (current question has 2 options)"
        );
    }
}
