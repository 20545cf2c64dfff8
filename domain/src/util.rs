//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_verse_reference() {
        assert_eq!(truncate("Jeremiah 29:11", 20), "Jeremiah 29:11");
        assert_eq!(truncate("2 Corinthians 5:7", 12), "2 Corinth...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Em-dash and curly quotes appear in verse text; stay on boundaries.
        assert_eq!(truncate("a\u{2014}b\u{2014}c", 20), "a\u{2014}b\u{2014}c");
        let cut = truncate("\u{1F54A}\u{1F54A}\u{1F54A}", 10);
        assert!(cut.ends_with("..."));
    }
}
