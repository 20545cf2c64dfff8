//! Application layer for selah
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; content and presentation are injected from outside.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    library::DevotionalLibraryPort,
    question_source::{QuestionSourcePort, SourceError},
};
pub use use_cases::{
    BeginReflectionUseCase, StartQuizError, StartQuizInput, StartQuizOutput, StartQuizUseCase,
};
