//! Built-in question catalog — the `QuestionSourcePort` adapter.

use super::{books, reflection, themes};
use selah_application::ports::question_source::{QuestionSourcePort, SourceError};
use selah_domain::{QuestionSet, QuizMode, TopicInfo, TopicKey};
use std::collections::HashMap;
use tracing::debug;

/// Topics advertised in the catalog but not yet available in this edition.
/// They render locked in the Play view and never resolve to a set.
const LOCKED_THEMES: &[(&str, &str, usize)] = &[
    ("love", "God's Love", 18),
    ("purpose", "Finding Purpose", 16),
    ("peace", "Inner Peace", 12),
    ("jesus", "Jesus' Teachings", 20),
];

const LOCKED_BOOKS: &[(&str, &str, usize)] = &[
    ("romans", "Romans", 14),
    ("james", "James", 10),
    ("revelation", "Revelation", 12),
];

/// In-memory catalog assembled at startup from the built-in tables, with
/// optional question packs layered on top.
pub struct BuiltinCatalog {
    sets: HashMap<TopicKey, QuestionSet>,
    theme_rows: Vec<TopicInfo>,
    book_rows: Vec<TopicInfo>,
    reflection: QuestionSet,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let mut sets = HashMap::new();
        let mut theme_rows = Vec::new();
        let mut book_rows = Vec::new();

        for (key, set) in themes::sets() {
            let name = themes::display_name(key.slug())
                .map(str::to_string)
                .unwrap_or_else(|| key.display_name());
            theme_rows.push(TopicInfo {
                key: key.clone(),
                name,
                question_count: set.len(),
                locked: false,
            });
            sets.insert(key, set);
        }
        for (slug, name, count) in LOCKED_THEMES {
            theme_rows.push(TopicInfo {
                key: TopicKey::theme(*slug),
                name: (*name).to_string(),
                question_count: *count,
                locked: true,
            });
        }

        for (key, set) in books::sets() {
            book_rows.push(TopicInfo {
                key: key.clone(),
                name: key.display_name(),
                question_count: set.len(),
                locked: false,
            });
            sets.insert(key, set);
        }
        for (slug, name, count) in LOCKED_BOOKS {
            book_rows.push(TopicInfo {
                key: TopicKey::book(*slug),
                name: (*name).to_string(),
                question_count: *count,
                locked: true,
            });
        }

        Self {
            sets,
            theme_rows,
            book_rows,
            reflection: reflection::daily_set(),
        }
    }

    /// Add or replace a topic. Pack-provided sets override built-ins with
    /// the same key.
    pub fn insert(&mut self, key: TopicKey, name: String, locked: bool, set: QuestionSet) {
        let row = TopicInfo {
            key: key.clone(),
            name,
            question_count: set.len(),
            locked,
        };
        let rows = match key.mode() {
            QuizMode::Theme => &mut self.theme_rows,
            QuizMode::Book => &mut self.book_rows,
        };
        if let Some(existing) = rows.iter_mut().find(|r| r.key == key) {
            debug!(topic = %key, "pack overrides existing topic");
            *existing = row;
        } else {
            rows.push(row);
        }
        self.sets.insert(key, set);
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSourcePort for BuiltinCatalog {
    fn question_set(&self, topic: &TopicKey) -> Result<QuestionSet, SourceError> {
        self.sets
            .get(topic)
            .cloned()
            .ok_or_else(|| SourceError::TopicNotFound {
                topic: topic.to_string(),
            })
    }

    fn daily_reflection(&self) -> QuestionSet {
        self.reflection.clone()
    }

    fn topics(&self, mode: QuizMode) -> Vec<TopicInfo> {
        match mode {
            QuizMode::Theme => self.theme_rows.clone(),
            QuizMode::Book => self.book_rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selah_domain::{Question, QuestionSet};

    #[test]
    fn test_every_unlocked_topic_resolves() {
        let catalog = BuiltinCatalog::new();
        for mode in [QuizMode::Theme, QuizMode::Book] {
            for info in catalog.topics(mode) {
                if info.locked {
                    assert!(catalog.question_set(&info.key).is_err());
                } else {
                    let set = catalog.question_set(&info.key).unwrap();
                    assert_eq!(set.len(), info.question_count);
                }
            }
        }
    }

    #[test]
    fn test_unknown_topic_is_not_found() {
        let catalog = BuiltinCatalog::new();
        let err = catalog
            .question_set(&TopicKey::book("habakkuk"))
            .unwrap_err();
        assert_eq!(
            err,
            SourceError::TopicNotFound {
                topic: "book:habakkuk".into(),
            }
        );
    }

    #[test]
    fn test_locked_topics_listed_after_unlocked() {
        let catalog = BuiltinCatalog::new();
        let rows = catalog.topics(QuizMode::Theme);
        assert_eq!(rows.len(), 8);
        assert!(rows[..4].iter().all(|r| !r.locked));
        assert!(rows[4..].iter().all(|r| r.locked));
    }

    #[test]
    fn test_insert_overrides_existing_topic() {
        let mut catalog = BuiltinCatalog::new();
        let set = QuestionSet::new(
            "Faith (extended)",
            vec![Question::true_false(1, "v", "r", "p", true, "e", "f")],
        )
        .unwrap();
        catalog.insert(
            TopicKey::theme("faith"),
            "Faith (extended)".into(),
            false,
            set,
        );

        let rows = catalog.topics(QuizMode::Theme);
        assert_eq!(rows.len(), 8);
        let faith = rows.iter().find(|r| r.key == TopicKey::theme("faith")).unwrap();
        assert_eq!(faith.name, "Faith (extended)");
        assert_eq!(faith.question_count, 1);
    }

    #[test]
    fn test_insert_new_topic_appends() {
        let mut catalog = BuiltinCatalog::new();
        let set = QuestionSet::new(
            "Ruth",
            vec![Question::true_false(1, "v", "r", "p", true, "e", "f")],
        )
        .unwrap();
        catalog.insert(TopicKey::book("ruth"), "Ruth".into(), false, set);

        let rows = catalog.topics(QuizMode::Book);
        assert_eq!(rows.len(), 9);
        assert!(catalog.question_set(&TopicKey::book("ruth")).is_ok());
    }

    #[test]
    fn test_daily_reflection_available() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(catalog.daily_reflection().title(), "Daily Reflection");
    }
}
