//! Terminal UI — the presentation shell around the quiz engine.
//!
//! Module map:
//! - [`nav`] — the five bottom tabs
//! - [`key`] — focus-aware key → action mapping
//! - [`state`] — the single state struct everything renders from
//! - [`views`] — per-tab renderers and the quiz/help overlays
//! - [`widgets`] — nav bar, status bar, progress meter
//! - [`app`] — terminal lifecycle and the event loop

pub mod app;
pub mod key;
pub mod nav;
pub mod state;
pub mod views;
pub mod widgets;

pub use app::{TuiApp, TuiOptions};
pub use nav::NavTab;
