//! Devotional library port.
//!
//! Read accessors for the non-quiz content the views render. Like the
//! question source, implementations resolve from data assembled at startup.

use selah_domain::{
    DailyVerse, JourneyHighlight, JourneyStat, Milestone, Passage, SpiritualPath, SuggestedReading,
};

/// Port for the devotional content behind the Home, Paths, Read, and
/// Profile views.
pub trait DevotionalLibraryPort: Send + Sync {
    /// The verse featured on today's reflection card.
    fn daily_verse(&self) -> DailyVerse;

    /// The passage currently featured in the Read view.
    fn featured_passage(&self) -> Passage;

    /// Recommended chapters below the featured passage.
    fn suggested_readings(&self) -> Vec<SuggestedReading>;

    /// All spiritual paths, unlocked first, in display order.
    fn paths(&self) -> Vec<SpiritualPath>;

    /// Journey milestone badges for the Home view.
    fn milestones(&self) -> Vec<Milestone>;

    /// Highlight rows for the Profile view.
    fn highlights(&self) -> Vec<JourneyHighlight>;

    /// Stat tiles for the Profile view.
    fn stats(&self) -> Vec<JourneyStat>;
}
