//! Built-in theme question sets.

use selah_domain::{Question, QuestionSet, TopicKey};

/// All playable theme sets in display order.
pub fn sets() -> Vec<(TopicKey, QuestionSet)> {
    vec![
        (TopicKey::theme("faith"), faith()),
        (TopicKey::theme("hope"), hope()),
        (TopicKey::theme("forgiveness"), forgiveness()),
        (TopicKey::theme("fear"), fear()),
    ]
}

/// Display name for a theme slug, where it differs from simple title-casing.
pub fn display_name(slug: &str) -> Option<&'static str> {
    match slug {
        "faith" => Some("Faith"),
        "hope" => Some("Hope"),
        "forgiveness" => Some("Forgiveness"),
        "fear" => Some("Overcoming Fear"),
        _ => None,
    }
}

fn faith() -> QuestionSet {
    QuestionSet::new(
        "Faith",
        vec![
            Question::multiple_choice(
                1,
                "Now faith is confidence in what we hope for and assurance about what we do not see.",
                "Hebrews 11:1",
                "According to this verse, faith is best described as:",
                vec![
                    "Believing only what we can prove".into(),
                    "Confidence in unseen hopes".into(),
                    "Following religious traditions".into(),
                    "Having no doubts ever".into(),
                ],
                1,
                "Faith is described as confidence and assurance in what we cannot see with our eyes.",
                "Consider today: where might God be inviting you to trust beyond what you can see?",
            ),
            Question::true_false(
                2,
                "For we walk by faith, not by sight.",
                "2 Corinthians 5:7",
                "Walking by faith means we must have complete understanding before taking steps forward.",
                false,
                "False! Walking by faith means trusting God's guidance even when we don't fully understand.",
                "What step might God be asking you to take today, even without full clarity?",
            ),
            Question::reflection(
                3,
                "I have fought the good fight, I have finished the race, I have kept the faith.",
                "2 Timothy 4:7",
                "What does 'keeping the faith' look like in your daily life?",
                vec![
                    "Attending church regularly".into(),
                    "Trusting God through challenges".into(),
                    "Sharing my beliefs with others".into(),
                    "All of these in different seasons".into(),
                ],
                "Keeping faith is a journey that looks different for everyone, encompassing worship, trust, and witness.",
                "How has your faith been tested recently? How did you respond?",
            ),
        ],
    )
    .expect("built-in faith set is valid")
}

fn hope() -> QuestionSet {
    QuestionSet::new(
        "Hope",
        vec![
            Question::multiple_choice(
                1,
                "For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you, plans to give you hope and a future.",
                "Jeremiah 29:11",
                "What does God promise about His plans for us?",
                vec![
                    "They will always be easy".into(),
                    "They include hope and a future".into(),
                    "We will never face difficulties".into(),
                    "We will become wealthy".into(),
                ],
                1,
                "God's plans are for our welfare, including hope and a future, though this doesn't mean no challenges.",
                "In what area of your life do you need to trust God's bigger plan today?",
            ),
            Question::true_false(
                2,
                "Be joyful in hope, patient in affliction, faithful in prayer.",
                "Romans 12:12",
                "According to this verse, hope and affliction can coexist.",
                true,
                "True! We can be joyful in hope even while being patient in affliction.",
                "How can you practice hope during a current difficulty in your life?",
            ),
            Question::reflection(
                3,
                "But those who hope in the Lord will renew their strength. They will soar on wings like eagles.",
                "Isaiah 40:31",
                "What does 'hoping in the Lord' mean to you personally?",
                vec![
                    "Waiting passively for change".into(),
                    "Active trust while I wait".into(),
                    "Expecting miracles daily".into(),
                    "Never feeling discouraged".into(),
                ],
                "Hoping in the Lord combines trust with patient waiting, leading to renewed strength.",
                "Where in your life do you need God's strength to help you soar?",
            ),
        ],
    )
    .expect("built-in hope set is valid")
}

fn forgiveness() -> QuestionSet {
    QuestionSet::new(
        "Forgiveness",
        vec![
            Question::multiple_choice(
                1,
                "Bear with each other and forgive one another if any of you has a grievance against someone. Forgive as the Lord forgave you.",
                "Colossians 3:13",
                "What is the standard for how we should forgive others?",
                vec![
                    "Only when they apologize first".into(),
                    "As the Lord forgave us".into(),
                    "When we feel ready".into(),
                    "Only minor offenses".into(),
                ],
                1,
                "We are called to forgive as Christ forgave us, fully and graciously.",
                "Is there someone you've been waiting to forgive? What would it take to begin that journey?",
            ),
            Question::true_false(
                2,
                "For if you forgive other people when they sin against you, your heavenly Father will also forgive you.",
                "Matthew 6:14",
                "Forgiving others affects our own relationship with God.",
                true,
                "True! Jesus teaches that our willingness to forgive others is connected to our own forgiveness.",
                "How might unforgiveness be affecting your spiritual life?",
            ),
            Question::reflection(
                3,
                "Be kind and compassionate to one another, forgiving each other, just as in Christ God forgave you.",
                "Ephesians 4:32",
                "What makes forgiveness most challenging for you?",
                vec![
                    "When the hurt was deep".into(),
                    "When there's no apology".into(),
                    "When I have to see them often".into(),
                    "When I'm still healing".into(),
                ],
                "Forgiveness is a process that takes time, especially with deep wounds. Be patient with yourself.",
                "What small step could you take today toward healing and forgiveness?",
            ),
        ],
    )
    .expect("built-in forgiveness set is valid")
}

fn fear() -> QuestionSet {
    QuestionSet::new(
        "Overcoming Fear",
        vec![
            Question::multiple_choice(
                1,
                "For God has not given us a spirit of fear, but of power and of love and of a sound mind.",
                "2 Timothy 1:7",
                "What has God given us instead of fear?",
                vec![
                    "Wealth and success".into(),
                    "Power, love, and sound mind".into(),
                    "Perfect circumstances".into(),
                    "Freedom from all problems".into(),
                ],
                1,
                "God equips us with power, love, and a sound mind to face our fears.",
                "Which of these three do you need most today: power, love, or a sound mind?",
            ),
            Question::true_false(
                2,
                "The Lord is my light and my salvation - whom shall I fear? The Lord is the stronghold of my life - of whom shall I be afraid?",
                "Psalm 27:1",
                "This verse suggests that with God as our stronghold, we have reason to not live in fear.",
                true,
                "True! When we recognize God as our light, salvation, and stronghold, fear loses its grip.",
                "What fear in your life needs to be surrendered to God today?",
            ),
            Question::reflection(
                3,
                "Even though I walk through the darkest valley, I will fear no evil, for you are with me.",
                "Psalm 23:4",
                "In dark times, what helps you remember God is with you?",
                vec![
                    "Reading Scripture".into(),
                    "Prayer and meditation".into(),
                    "Community and friends".into(),
                    "Past experiences of His faithfulness".into(),
                ],
                "God's presence is our greatest comfort in dark times, accessed through many means.",
                "How can you cultivate awareness of God's presence in your current challenges?",
            ),
        ],
    )
    .expect("built-in fear set is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use selah_domain::QuestionKind;

    #[test]
    fn test_all_theme_sets_are_valid_and_keyed() {
        let sets = sets();
        assert_eq!(sets.len(), 4);
        for (key, set) in &sets {
            assert_eq!(set.len(), 3);
            assert!(!key.slug().is_empty());
        }
    }

    #[test]
    fn test_each_theme_mixes_question_kinds() {
        for (_, set) in sets() {
            let kinds: Vec<_> = set.questions().iter().map(|q| q.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    QuestionKind::MultipleChoice,
                    QuestionKind::TrueFalse,
                    QuestionKind::Reflection,
                ]
            );
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("fear"), Some("Overcoming Fear"));
        assert_eq!(display_name("faith"), Some("Faith"));
        assert_eq!(display_name("patience"), None);
    }
}
