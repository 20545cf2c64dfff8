//! Built-in book question sets.

use selah_domain::{Question, QuestionSet, TopicKey};

/// All playable book sets in display order.
pub fn sets() -> Vec<(TopicKey, QuestionSet)> {
    vec![
        (TopicKey::book("genesis"), genesis()),
        (TopicKey::book("psalms"), psalms()),
        (TopicKey::book("proverbs"), proverbs()),
        (TopicKey::book("matthew"), matthew()),
        (TopicKey::book("john"), john()),
    ]
}

fn genesis() -> QuestionSet {
    QuestionSet::new(
        "Genesis",
        vec![
            Question::multiple_choice(
                1,
                "In the beginning God created the heavens and the earth.",
                "Genesis 1:1",
                "What does Genesis reveal as the very first thing?",
                vec![
                    "The creation of humanity".into(),
                    "God's existence and creative power".into(),
                    "The story of Adam and Eve".into(),
                    "The fall of mankind".into(),
                ],
                1,
                "The Bible opens by establishing God as the eternal Creator of all things.",
                "How does recognizing God as Creator change how you see the world around you?",
            ),
            Question::true_false(
                2,
                "Then God said, 'Let us make mankind in our image, in our likeness.'",
                "Genesis 1:26",
                "According to Genesis, humans are created in God's image.",
                true,
                "True! This establishes the inherent dignity and value of every human being.",
                "How does being made in God's image affect how you see yourself and others?",
            ),
            Question::reflection(
                3,
                "The Lord God said, 'It is not good for the man to be alone. I will make a helper suitable for him.'",
                "Genesis 2:18",
                "What does this verse teach about human relationships?",
                vec![
                    "We were created for community".into(),
                    "Marriage is the only relationship that matters".into(),
                    "Being alone is sinful".into(),
                    "We don't need God if we have people".into(),
                ],
                "God designed us for connection and community; we flourish in healthy relationships.",
                "How are your relationships reflecting God's design for community?",
            ),
        ],
    )
    .expect("built-in genesis set is valid")
}

fn psalms() -> QuestionSet {
    QuestionSet::new(
        "Psalms",
        vec![
            Question::multiple_choice(
                1,
                "The Lord is my shepherd, I lack nothing.",
                "Psalm 23:1",
                "What does calling God our 'shepherd' imply?",
                vec![
                    "We are His followers".into(),
                    "He provides and guides us".into(),
                    "We are weak and helpless".into(),
                    "Religion is outdated".into(),
                ],
                1,
                "A shepherd provides, protects, and guides; this is God's relationship with us.",
                "In what area of life do you need to trust the Shepherd's guidance today?",
            ),
            Question::true_false(
                2,
                "I will praise you, Lord, with all my heart; I will tell of all your wonderful deeds.",
                "Psalm 9:1",
                "Praise in the Psalms is typically shown as half-hearted and occasional.",
                false,
                "False! The Psalms model wholehearted, enthusiastic praise to God.",
                "What wonderful deed of God could you praise Him for today?",
            ),
            Question::reflection(
                3,
                "Create in me a pure heart, O God, and renew a steadfast spirit within me.",
                "Psalm 51:10",
                "What does David's prayer reveal about spiritual growth?",
                vec![
                    "We can purify ourselves".into(),
                    "God is the one who transforms us".into(),
                    "Past sins disqualify us".into(),
                    "Perfection is required".into(),
                ],
                "David acknowledges that true heart change comes from God, not our own efforts.",
                "What would you ask God to renew or create fresh in your heart today?",
            ),
        ],
    )
    .expect("built-in psalms set is valid")
}

fn proverbs() -> QuestionSet {
    QuestionSet::new(
        "Proverbs",
        vec![
            Question::multiple_choice(
                1,
                "The fear of the Lord is the beginning of knowledge, but fools despise wisdom and instruction.",
                "Proverbs 1:7",
                "What is the foundation of true knowledge according to Proverbs?",
                vec![
                    "Higher education".into(),
                    "Life experience".into(),
                    "Reverent awe of God".into(),
                    "Natural intelligence".into(),
                ],
                2,
                "Wisdom begins with properly honoring God; this orients all other learning.",
                "How does your reverence for God shape your pursuit of knowledge?",
            ),
            Question::true_false(
                2,
                "Trust in the Lord with all your heart and lean not on your own understanding.",
                "Proverbs 3:5",
                "This verse encourages us to fully rely on our own reasoning.",
                false,
                "False! We're called to trust God's wisdom above our limited understanding.",
                "Where are you tempted to rely only on your own understanding?",
            ),
            Question::reflection(
                3,
                "A gentle answer turns away wrath, but a harsh word stirs up anger.",
                "Proverbs 15:1",
                "How does this wisdom apply to your relationships?",
                vec![
                    "Avoid all conflict".into(),
                    "Speak gently in tense moments".into(),
                    "Never express disagreement".into(),
                    "Be passive in all situations".into(),
                ],
                "Gentleness is powerful; it de-escalates conflict and opens hearts.",
                "Think of a recent difficult conversation. How might gentleness have changed it?",
            ),
        ],
    )
    .expect("built-in proverbs set is valid")
}

fn matthew() -> QuestionSet {
    QuestionSet::new(
        "Matthew",
        vec![
            Question::multiple_choice(
                1,
                "Blessed are the poor in spirit, for theirs is the kingdom of heaven.",
                "Matthew 5:3",
                "Being 'poor in spirit' refers to:",
                vec![
                    "Having no money".into(),
                    "Feeling sad or depressed".into(),
                    "Recognizing our need for God".into(),
                    "Lacking confidence".into(),
                ],
                2,
                "Being poor in spirit means humbly recognizing our spiritual need and dependence on God.",
                "How does humility open the door to experiencing God's kingdom?",
            ),
            Question::true_false(
                2,
                "But seek first his kingdom and his righteousness, and all these things will be given to you as well.",
                "Matthew 6:33",
                "Jesus teaches that we should prioritize God's kingdom above our material needs.",
                true,
                "True! Jesus promises that when we prioritize His kingdom, our needs will be met.",
                "What would it look like to seek God's kingdom first in your daily decisions?",
            ),
            Question::reflection(
                3,
                "Come to me, all you who are weary and burdened, and I will give you rest.",
                "Matthew 11:28",
                "What is Jesus offering in this invitation?",
                vec![
                    "A vacation from problems".into(),
                    "Soul rest and peace".into(),
                    "An easy life".into(),
                    "Freedom from all responsibility".into(),
                ],
                "Jesus offers deep soul rest; not absence of work, but peace amid life's demands.",
                "What burden do you need to bring to Jesus today?",
            ),
        ],
    )
    .expect("built-in matthew set is valid")
}

fn john() -> QuestionSet {
    QuestionSet::new(
        "John",
        vec![
            Question::multiple_choice(
                1,
                "In the beginning was the Word, and the Word was with God, and the Word was God.",
                "John 1:1",
                "Who is 'the Word' referring to in this verse?",
                vec![
                    "The Bible".into(),
                    "Jesus Christ".into(),
                    "The Holy Spirit".into(),
                    "The Ten Commandments".into(),
                ],
                1,
                "John identifies Jesus as 'the Word': eternal, divine, and present at creation.",
                "How does knowing Jesus is eternal change how you relate to Him?",
            ),
            Question::true_false(
                2,
                "For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.",
                "John 3:16",
                "According to this verse, God's love is conditional on our behavior.",
                false,
                "False! God loved and gave while we were still sinners; His love initiates, not responds.",
                "How does unconditional love change how you approach God?",
            ),
            Question::reflection(
                3,
                "Jesus said to her, 'I am the resurrection and the life. The one who believes in me will live, even though they die.'",
                "John 11:25",
                "What hope does this promise give you?",
                vec![
                    "Death is not the end".into(),
                    "This life is all that matters".into(),
                    "We earn eternal life".into(),
                    "Only perfect people are saved".into(),
                ],
                "Jesus offers hope beyond death: eternal life through faith in Him.",
                "How does the promise of resurrection affect how you live today?",
            ),
        ],
    )
    .expect("built-in john set is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_book_sets_are_valid_and_keyed() {
        let sets = sets();
        assert_eq!(sets.len(), 5);
        for (key, set) in &sets {
            assert_eq!(set.len(), 3);
            assert_eq!(key.mode(), selah_domain::QuizMode::Book);
        }
    }

    #[test]
    fn test_scored_questions_have_correct_options() {
        for (_, set) in sets() {
            for question in set.questions() {
                assert_eq!(question.kind.is_scored(), question.correct_option.is_some());
            }
        }
    }
}
