//! Scripture reading entities for the Read view.

use serde::{Deserialize, Serialize};

/// A single verse within a passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageVerse {
    pub number: u32,
    pub text: String,
}

/// A chapter-sized Scripture excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub book: String,
    pub chapter: u32,
    pub verses: Vec<PassageVerse>,
}

impl Passage {
    pub fn new(book: impl Into<String>, chapter: u32, verses: Vec<PassageVerse>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verses,
        }
    }

    /// `Psalm 23` style header reference.
    pub fn reference(&self) -> String {
        format!("{} {}", self.book, self.chapter)
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// A pointer to a recommended chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedReading {
    pub book: String,
    pub chapter: u32,
    pub title: String,
}

impl SuggestedReading {
    pub fn reference(&self) -> String {
        format!("{} {}", self.book, self.chapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passage_reference() {
        let passage = Passage::new(
            "Psalm",
            23,
            vec![PassageVerse {
                number: 1,
                text: "The Lord is my shepherd; I shall not want.".into(),
            }],
        );
        assert_eq!(passage.reference(), "Psalm 23");
        assert_eq!(passage.len(), 1);
        assert!(!passage.is_empty());
    }

    #[test]
    fn test_suggested_reading_reference() {
        let reading = SuggestedReading {
            book: "1 Corinthians".into(),
            chapter: 13,
            title: "The Way of Love".into(),
        };
        assert_eq!(reading.reference(), "1 Corinthians 13");
    }
}
