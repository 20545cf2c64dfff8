//! The daily reflection walk and the rotating verse table.

use selah_domain::{DailyVerse, Question, QuestionSet};

/// The guided reflection launched from the Home view. Reflection questions
/// only — no scoring anywhere in this walk.
pub fn daily_set() -> QuestionSet {
    QuestionSet::new(
        "Daily Reflection",
        vec![
            Question::reflection(
                1,
                "Cast all your anxiety on him because he cares for you.",
                "1 Peter 5:7",
                "When facing anxiety, what feels most natural to you?",
                vec![
                    "I try to control every detail myself".into(),
                    "I share my worries with friends or family".into(),
                    "I pray and try to trust God's plan".into(),
                    "I avoid thinking about what worries me".into(),
                ],
                "God invites us to release our burdens to Him. No matter how you answered, know that learning to trust is a journey.",
                "What burden could you hand over today?",
            ),
            Question::reflection(
                2,
                "Be kind and compassionate to one another, forgiving each other, just as in Christ God forgave you.",
                "Ephesians 4:32",
                "Think of someone who has hurt you. Which response resonates most?",
                vec![
                    "I've fully forgiven them and moved on".into(),
                    "I'm working on forgiveness but it's hard".into(),
                    "I struggle to even consider forgiving".into(),
                    "I'm not sure what true forgiveness looks like".into(),
                ],
                "Forgiveness is not about forgetting, but about freeing yourself. Christ's forgiveness of us shows us the way.",
                "What would one step toward forgiveness look like?",
            ),
            Question::reflection(
                3,
                "For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.",
                "John 3:16",
                "How does knowing God's love affect your daily life?",
                vec![
                    "It gives me peace and confidence".into(),
                    "I believe it but don't always feel it".into(),
                    "I struggle to accept I'm truly loved".into(),
                    "I'm still exploring what this means".into(),
                ],
                "God's love is unconditional and ever-present. Feeling it may take time, but His love remains constant.",
                "Where could you lean on that love this week?",
            ),
        ],
    )
    .expect("built-in daily reflection set is valid")
}

/// Verses the Home card rotates through, one per day.
pub fn daily_verses() -> Vec<DailyVerse> {
    vec![
        DailyVerse {
            verse: "For I know the plans I have for you, declares the Lord, plans for welfare and not for evil, to give you a future and a hope.".into(),
            reference: "Jeremiah 29:11".into(),
            theme: "Hope".into(),
        },
        DailyVerse {
            verse: "Cast all your anxiety on him because he cares for you.".into(),
            reference: "1 Peter 5:7".into(),
            theme: "Peace".into(),
        },
        DailyVerse {
            verse: "Trust in the Lord with all your heart and lean not on your own understanding.".into(),
            reference: "Proverbs 3:5".into(),
            theme: "Trust".into(),
        },
        DailyVerse {
            verse: "The Lord is my shepherd, I lack nothing.".into(),
            reference: "Psalm 23:1".into(),
            theme: "Provision".into(),
        },
        DailyVerse {
            verse: "Come to me, all you who are weary and burdened, and I will give you rest.".into(),
            reference: "Matthew 11:28".into(),
            theme: "Rest".into(),
        },
        DailyVerse {
            verse: "Be joyful in hope, patient in affliction, faithful in prayer.".into(),
            reference: "Romans 12:12".into(),
            theme: "Perseverance".into(),
        },
        DailyVerse {
            verse: "For we walk by faith, not by sight.".into(),
            reference: "2 Corinthians 5:7".into(),
            theme: "Faith".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use selah_domain::QuestionKind;

    #[test]
    fn test_daily_set_is_reflection_only() {
        let set = daily_set();
        assert_eq!(set.len(), 3);
        for question in set.questions() {
            assert_eq!(question.kind, QuestionKind::Reflection);
            assert_eq!(question.correct_option, None);
        }
    }

    #[test]
    fn test_verse_table_is_nonempty() {
        assert!(!daily_verses().is_empty());
    }
}
