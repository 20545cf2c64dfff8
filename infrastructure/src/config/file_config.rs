//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file. They are
//! deserialized directly and converted to domain types where appropriate.

use selah_domain::{QuizMode, TopicKey};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single issue detected during config validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub ui: FileUiConfig,
    pub quiz: FileQuizConfig,
    pub content: FileContentConfig,
}

/// `[ui]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Tab shown on launch: home, play, paths, read, or profile.
    pub start_tab: String,
    /// Whether the key-hint bar renders at the bottom.
    pub show_hints: bool,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            start_tab: "home".to_string(),
            show_hints: true,
        }
    }
}

/// `[quiz]` section — the caller-owned fallback topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    pub default_theme: String,
    pub default_book: String,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            default_theme: "faith".to_string(),
            default_book: "psalms".to_string(),
        }
    }
}

impl FileQuizConfig {
    /// The fallback topic for a browse mode.
    pub fn fallback(&self, mode: QuizMode) -> TopicKey {
        match mode {
            QuizMode::Theme => TopicKey::theme(&self.default_theme),
            QuizMode::Book => TopicKey::book(&self.default_book),
        }
    }
}

/// `[content]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentConfig {
    /// Question pack files merged into the catalog at startup.
    pub packs: Vec<PathBuf>,
}

const VALID_TABS: &[&str] = &["home", "play", "paths", "read", "profile"];

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Issues are warnings, never fatal: the loader falls back to defaults
    /// for the offending fields.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !VALID_TABS.contains(&self.ui.start_tab.to_lowercase().as_str()) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "ui.start_tab".to_string(),
                message: format!(
                    "unknown tab '{}', falling back to 'home' (valid: {})",
                    self.ui.start_tab,
                    VALID_TABS.join(", ")
                ),
            });
        }

        for (field, value) in [
            ("quiz.default_theme", &self.quiz.default_theme),
            ("quiz.default_book", &self.quiz.default_book),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    field: field.to_string(),
                    message: format!("{} is empty, built-in default applies", field),
                });
            }
        }

        for pack in &self.content.packs {
            if !pack.exists() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    field: "content.packs".to_string(),
                    message: format!("pack file not found: {}", pack.display()),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.ui.start_tab, "home");
        assert!(config.ui.show_hints);
        assert_eq!(config.quiz.default_theme, "faith");
        assert_eq!(config.quiz.default_book, "psalms");
        assert!(config.content.packs.is_empty());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_fallback_topics() {
        let config = FileQuizConfig::default();
        assert_eq!(config.fallback(QuizMode::Theme), TopicKey::theme("faith"));
        assert_eq!(config.fallback(QuizMode::Book), TopicKey::book("psalms"));
    }

    #[test]
    fn test_unknown_start_tab_flagged() {
        let mut config = FileConfig::default();
        config.ui.start_tab = "settings".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].field, "ui.start_tab");
    }

    #[test]
    fn test_empty_default_topic_flagged() {
        let mut config = FileConfig::default();
        config.quiz.default_theme = "  ".to_string();
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.field == "quiz.default_theme"));
    }

    #[test]
    fn test_missing_pack_flagged() {
        let mut config = FileConfig::default();
        config.content.packs.push("/nonexistent/pack.toml".into());
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.field == "content.packs"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_text = r#"
[ui]
start_tab = "play"
show_hints = false

[quiz]
default_theme = "hope"

[content]
packs = ["packs/patience.toml"]
"#;
        let config: FileConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.ui.start_tab, "play");
        assert!(!config.ui.show_hints);
        assert_eq!(config.quiz.default_theme, "hope");
        // Unset fields keep their defaults
        assert_eq!(config.quiz.default_book, "psalms");
        assert_eq!(config.content.packs.len(), 1);
    }
}
