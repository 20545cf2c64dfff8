//! Console output formatting for the non-TUI surface (`--list`).

use colored::Colorize;
use selah_domain::TopicInfo;

/// Formats the topic catalog for plain console output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render both catalog halves as a printable listing.
    pub fn format_topics(themes: &[TopicInfo], books: &[TopicInfo]) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "Themes".bold()));
        for topic in themes {
            out.push_str(&Self::format_row(topic));
        }
        out.push_str(&format!("\n{}\n", "Books".bold()));
        for topic in books {
            out.push_str(&Self::format_row(topic));
        }
        out
    }

    fn format_row(topic: &TopicInfo) -> String {
        let name = if topic.locked {
            format!("{} {}", topic.name.dimmed(), "[locked]".magenta())
        } else {
            topic.name.green().to_string()
        };
        format!(
            "  {:<40} {} questions  ({})\n",
            name,
            topic.question_count,
            topic.key.slug()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selah_domain::TopicKey;

    #[test]
    fn test_format_lists_both_sections() {
        colored::control::set_override(false);
        let themes = vec![TopicInfo {
            key: TopicKey::theme("faith"),
            name: "Faith".into(),
            question_count: 3,
            locked: false,
        }];
        let books = vec![TopicInfo {
            key: TopicKey::book("romans"),
            name: "Romans".into(),
            question_count: 14,
            locked: true,
        }];

        let out = ConsoleFormatter::format_topics(&themes, &books);
        assert!(out.contains("Themes"));
        assert!(out.contains("Faith"));
        assert!(out.contains("(faith)"));
        assert!(out.contains("Books"));
        assert!(out.contains("[locked]"));
        assert!(out.contains("14 questions"));
    }
}
