//! Presentation layer for selah
//!
//! This crate contains the ratatui shell (tabs, views, quiz overlay), the
//! CLI argument definitions, and console formatting for non-TUI output.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use output::ConsoleFormatter;
pub use tui::{NavTab, TuiApp, TuiOptions};
