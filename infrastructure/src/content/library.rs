//! Built-in devotional library — the `DevotionalLibraryPort` adapter.

use super::reflection;
use chrono::{Datelike, Local};
use selah_application::ports::library::DevotionalLibraryPort;
use selah_domain::{
    DailyVerse, JourneyHighlight, JourneyStat, Milestone, Passage, PassageVerse, SpiritualPath,
    SuggestedReading,
};

/// Static devotional content with the daily verse rotated by calendar day.
pub struct BuiltinLibrary {
    day_ordinal: u32,
}

impl BuiltinLibrary {
    pub fn new() -> Self {
        Self {
            day_ordinal: Local::now().ordinal0(),
        }
    }

    /// Fixed rotation index, for deterministic tests.
    pub fn with_day_ordinal(day_ordinal: u32) -> Self {
        Self { day_ordinal }
    }
}

impl Default for BuiltinLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl DevotionalLibraryPort for BuiltinLibrary {
    fn daily_verse(&self) -> DailyVerse {
        let verses = reflection::daily_verses();
        let index = self.day_ordinal as usize % verses.len();
        verses[index].clone()
    }

    fn featured_passage(&self) -> Passage {
        Passage::new(
            "Psalm",
            23,
            vec![
                PassageVerse {
                    number: 1,
                    text: "The Lord is my shepherd; I shall not want.".into(),
                },
                PassageVerse {
                    number: 2,
                    text: "He maketh me to lie down in green pastures: he leadeth me beside the still waters.".into(),
                },
                PassageVerse {
                    number: 3,
                    text: "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake.".into(),
                },
                PassageVerse {
                    number: 4,
                    text: "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me.".into(),
                },
                PassageVerse {
                    number: 5,
                    text: "Thou preparest a table before me in the presence of mine enemies: thou anointest my head with oil; my cup runneth over.".into(),
                },
                PassageVerse {
                    number: 6,
                    text: "Surely goodness and mercy shall follow me all the days of my life: and I will dwell in the house of the Lord for ever.".into(),
                },
            ],
        )
    }

    fn suggested_readings(&self) -> Vec<SuggestedReading> {
        vec![
            SuggestedReading {
                book: "John".into(),
                chapter: 3,
                title: "God's Love for the World".into(),
            },
            SuggestedReading {
                book: "Romans".into(),
                chapter: 8,
                title: "Life Through the Spirit".into(),
            },
            SuggestedReading {
                book: "Matthew".into(),
                chapter: 5,
                title: "The Beatitudes".into(),
            },
            SuggestedReading {
                book: "1 Corinthians".into(),
                chapter: 13,
                title: "The Way of Love".into(),
            },
        ]
    }

    fn paths(&self) -> Vec<SpiritualPath> {
        vec![
            SpiritualPath {
                slug: "hope".into(),
                title: "Finding Hope".into(),
                description: "Discover God's promises for your future and learn to trust in His plan.".into(),
                emblem: "🌅".into(),
                total_lessons: 10,
                completed_lessons: 6,
                locked: false,
            },
            SpiritualPath {
                slug: "forgiveness".into(),
                title: "The Path of Forgiveness".into(),
                description: "Experience freedom through the transformative power of forgiveness.".into(),
                emblem: "🕊".into(),
                total_lessons: 8,
                completed_lessons: 2,
                locked: false,
            },
            SpiritualPath {
                slug: "fear".into(),
                title: "Overcoming Fear".into(),
                description: "Find courage and peace through Scripture when facing life's challenges.".into(),
                emblem: "🛡".into(),
                total_lessons: 8,
                completed_lessons: 8,
                locked: false,
            },
            SpiritualPath {
                slug: "faith".into(),
                title: "Growing in Faith".into(),
                description: "Strengthen your trust in God through daily spiritual practices.".into(),
                emblem: "🌱".into(),
                total_lessons: 12,
                completed_lessons: 0,
                locked: true,
            },
            SpiritualPath {
                slug: "jesus-teachings".into(),
                title: "Words of Jesus".into(),
                description: "Deep dive into the teachings of Christ and their meaning for today.".into(),
                emblem: "✨".into(),
                total_lessons: 15,
                completed_lessons: 0,
                locked: true,
            },
            SpiritualPath {
                slug: "love".into(),
                title: "Understanding Love".into(),
                description: "Explore the many dimensions of God's love and how to share it.".into(),
                emblem: "❤".into(),
                total_lessons: 10,
                completed_lessons: 0,
                locked: true,
            },
        ]
    }

    fn milestones(&self) -> Vec<Milestone> {
        vec![
            Milestone {
                label: "Seeker".into(),
                description: "Started your journey".into(),
                achieved: true,
            },
            Milestone {
                label: "Reflector".into(),
                description: "Explored daily reflections".into(),
                achieved: true,
            },
            Milestone {
                label: "Explorer".into(),
                description: "Began a spiritual path".into(),
                achieved: true,
            },
            Milestone {
                label: "Growing".into(),
                description: "Deepening in faith".into(),
                achieved: false,
            },
        ]
    }

    fn highlights(&self) -> Vec<JourneyHighlight> {
        vec![
            JourneyHighlight {
                title: "Finding Hope".into(),
                description: "Currently exploring".into(),
            },
            JourneyHighlight {
                title: "Forgiveness".into(),
                description: "Recently visited".into(),
            },
            JourneyHighlight {
                title: "Daily Reflections".into(),
                description: "Part of your journey".into(),
            },
        ]
    }

    fn stats(&self) -> Vec<JourneyStat> {
        vec![
            JourneyStat {
                label: "Day Streak".into(),
                value: "7".into(),
            },
            JourneyStat {
                label: "Verses Read".into(),
                value: "45".into(),
            },
            JourneyStat {
                label: "Paths Done".into(),
                value: "2".into(),
            },
            JourneyStat {
                label: "This Week".into(),
                value: "5/7".into(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_verse_rotates_by_day() {
        let a = BuiltinLibrary::with_day_ordinal(0).daily_verse();
        let b = BuiltinLibrary::with_day_ordinal(1).daily_verse();
        assert_ne!(a, b);

        let wrapped =
            BuiltinLibrary::with_day_ordinal(reflection::daily_verses().len() as u32).daily_verse();
        assert_eq!(a, wrapped);
    }

    #[test]
    fn test_featured_passage_is_psalm_23() {
        let passage = BuiltinLibrary::with_day_ordinal(0).featured_passage();
        assert_eq!(passage.reference(), "Psalm 23");
        assert_eq!(passage.len(), 6);
        let numbers: Vec<u32> = passage.verses.iter().map(|v| v.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_paths_unlocked_first() {
        let paths = BuiltinLibrary::with_day_ordinal(0).paths();
        assert_eq!(paths.len(), 6);
        assert!(paths[..3].iter().all(|p| !p.locked));
        assert!(paths[3..].iter().all(|p| p.locked));
    }

    #[test]
    fn test_completed_path_reports_complete() {
        let paths = BuiltinLibrary::with_day_ordinal(0).paths();
        let fear = paths.iter().find(|p| p.slug == "fear").unwrap();
        assert!(fear.is_complete());
        assert_eq!(fear.progress_percent(), 100);
    }

    #[test]
    fn test_fixed_tables_nonempty() {
        let library = BuiltinLibrary::with_day_ordinal(0);
        assert_eq!(library.suggested_readings().len(), 4);
        assert_eq!(library.milestones().len(), 4);
        assert_eq!(library.highlights().len(), 3);
        assert_eq!(library.stats().len(), 4);
    }
}
