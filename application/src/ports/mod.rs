//! Port definitions — interfaces the application layer consumes.

pub mod library;
pub mod question_source;

pub use library::DevotionalLibraryPort;
pub use question_source::{QuestionSourcePort, SourceError};
