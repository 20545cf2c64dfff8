//! Journey entities — spiritual paths, milestones, and daily content.

use serde::{Deserialize, Serialize};

/// A guided multi-lesson journey shown on the Home and Paths views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritualPath {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Decorative marker rendered before the title.
    pub emblem: String,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub locked: bool,
}

impl SpiritualPath {
    /// Completion percentage in `0..=100`.
    pub fn progress_percent(&self) -> u16 {
        if self.total_lessons == 0 {
            return 0;
        }
        (self.completed_lessons * 100 / self.total_lessons) as u16
    }

    pub fn is_complete(&self) -> bool {
        self.total_lessons > 0 && self.completed_lessons >= self.total_lessons
    }

    /// `2 of 8 lessons` style caption.
    pub fn lessons_caption(&self) -> String {
        format!(
            "{} of {} lessons",
            self.completed_lessons, self.total_lessons
        )
    }
}

/// A journey milestone badge on the Home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    pub description: String,
    pub achieved: bool,
}

/// A highlight row on the Profile view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyHighlight {
    pub title: String,
    pub description: String,
}

/// A small stat tile on the Profile view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStat {
    pub label: String,
    pub value: String,
}

/// The verse featured on the Home view's reflection card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVerse {
    pub verse: String,
    pub reference: String,
    pub theme: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(completed: u32, total: u32) -> SpiritualPath {
        SpiritualPath {
            slug: "hope".into(),
            title: "Finding Hope".into(),
            description: "Discover God's promises.".into(),
            emblem: "~".into(),
            total_lessons: total,
            completed_lessons: completed,
            locked: false,
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(path(6, 10).progress_percent(), 60);
        assert_eq!(path(0, 10).progress_percent(), 0);
        assert_eq!(path(8, 8).progress_percent(), 100);
        assert_eq!(path(0, 0).progress_percent(), 0);
    }

    #[test]
    fn test_is_complete() {
        assert!(path(8, 8).is_complete());
        assert!(!path(2, 8).is_complete());
        assert!(!path(0, 0).is_complete());
    }

    #[test]
    fn test_lessons_caption() {
        assert_eq!(path(2, 8).lessons_caption(), "2 of 8 lessons");
    }
}
