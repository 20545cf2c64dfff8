//! Topic value objects — how the quiz catalog is keyed and browsed.

use serde::{Deserialize, Serialize};

/// The two ways the Play catalog groups question sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    Theme,
    Book,
}

impl QuizMode {
    pub fn as_str(&self) -> &str {
        match self {
            QuizMode::Theme => "theme",
            QuizMode::Book => "book",
        }
    }

    /// Sub-tab label in the Play view.
    pub fn display_name(&self) -> &str {
        match self {
            QuizMode::Theme => "By Theme",
            QuizMode::Book => "By Book",
        }
    }
}

impl std::str::FromStr for QuizMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "theme" | "themes" => Ok(QuizMode::Theme),
            "book" | "books" => Ok(QuizMode::Book),
            _ => Err(format!("Invalid QuizMode: {}", s)),
        }
    }
}

impl std::fmt::Display for QuizMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key identifying a question set in the catalog (Value Object).
///
/// Slugs are normalized to lowercase so lookups and config values compare
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicKey {
    mode: QuizMode,
    slug: String,
}

impl TopicKey {
    pub fn new(mode: QuizMode, slug: impl Into<String>) -> Self {
        Self {
            mode,
            slug: slug.into().to_lowercase(),
        }
    }

    pub fn theme(slug: impl Into<String>) -> Self {
        Self::new(QuizMode::Theme, slug)
    }

    pub fn book(slug: impl Into<String>) -> Self {
        Self::new(QuizMode::Book, slug)
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Title-cased slug for headers and the completion screen.
    pub fn display_name(&self) -> String {
        let mut chars = self.slug.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for TopicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.mode, self.slug)
    }
}

/// Catalog row shown in the Play view: a playable (or locked) topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicInfo {
    pub key: TopicKey,
    pub name: String,
    pub question_count: usize,
    /// Listed but not playable. Selecting a locked topic is a no-op.
    pub locked: bool,
}
