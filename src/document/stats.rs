//! Text statistics for the status bar
//!
//! Counts lines, words, characters and bytes in a single pass, plus the
//! Markdown-aware word count used for reading time estimates.

use regex::Regex;
use std::sync::LazyLock;

/// Default reading speed for [`estimate_reading_time`].
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

// ─────────────────────────────────────────────────────────────────────────────
// TextStats
// ─────────────────────────────────────────────────────────────────────────────

/// Raw statistics for a document.
///
/// # Example
///
/// ```ignore
/// let stats = TextStats::from_text("Hello, World!\nBye");
/// assert_eq!(stats.lines, 2);
/// assert_eq!(stats.words, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of lines; a trailing newline starts a new, empty line
    pub lines: usize,
    /// Number of whitespace-separated words
    pub words: usize,
    pub characters: usize,
    /// UTF-8 encoded size
    pub bytes: usize,
}

impl TextStats {
    /// Calculate statistics from the given text.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self {
            lines: 1,
            bytes: text.len(),
            ..Self::default()
        };

        let mut in_word = false;
        for ch in text.chars() {
            stats.characters += 1;
            if ch == '\n' {
                stats.lines += 1;
            }
            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                stats.words += 1;
            }
        }

        stats
    }

    /// Human-readable document size.
    pub fn size_label(&self) -> String {
        format_size(self.bytes)
    }

    /// Format the statistics for display in the status bar.
    ///
    /// Returns a compact string like "25 lines | 150 words | 1.2 KB"
    pub fn format_compact(&self) -> String {
        format!(
            "{} lines | {} words | {}",
            self.lines,
            self.words,
            self.size_label()
        )
    }
}

/// Format a byte count as `B`, `KB` or `MB` with one decimal above bytes.
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Markdown Word Count
// ─────────────────────────────────────────────────────────────────────────────

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("Invalid fenced code regex"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`").expect("Invalid inline code regex"));

static LINK_OR_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[[^\]]*\]\([^)]*\)").expect("Invalid link regex"));

static EMPHASIS_MARKERS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [r"\*\*([^*]*)\*\*", r"\*([^*]*)\*", r"~~([^~]*)~~"]
        .map(|pattern| Regex::new(pattern).expect("Invalid emphasis regex"))
});

/// Count the words a reader would read.
///
/// Code (fenced and inline) and links or images are dropped entirely;
/// emphasis markers are removed but their content still counts.
pub fn count_words(text: &str) -> usize {
    let text = FENCED_CODE.replace_all(text, "");
    let text = INLINE_CODE.replace_all(&text, "");
    let mut text = LINK_OR_IMAGE.replace_all(&text, "").into_owned();
    for pattern in EMPHASIS_MARKERS.iter() {
        text = pattern.replace_all(&text, "$1").into_owned();
    }
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than one.
pub fn estimate_reading_time(text: &str, words_per_minute: usize) -> usize {
    let wpm = words_per_minute.max(1);
    let minutes = (count_words(text) as f64 / wpm as f64).round() as usize;
    minutes.max(1)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // TextStats Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_stats_empty_text() {
        let stats = TextStats::from_text("");
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.bytes, 0);
    }

    #[test]
    fn test_stats_multiple_lines() {
        let stats = TextStats::from_text("Line one\nLine two\nLine three");
        assert_eq!(stats.words, 6);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_stats_trailing_newline() {
        let stats = TextStats::from_text("Hello\n");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 1);
    }

    #[test]
    fn test_stats_unicode() {
        let stats = TextStats::from_text("Привет мир! 你好世界");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 16);
        assert_eq!(stats.bytes, "Привет мир! 你好世界".len());
    }

    #[test]
    fn test_stats_mixed_whitespace() {
        let stats = TextStats::from_text("word1  word2\t\tword3");
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_stats_format_compact() {
        let stats = TextStats {
            lines: 25,
            words: 150,
            characters: 892,
            bytes: 2048,
        };
        assert_eq!(stats.format_compact(), "25 lines | 150 words | 2.0 KB");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Size Formatting
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Word Count
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_count_words_ignores_code_and_links() {
        let text = "Read **this** now\n```\nlet x = 1;\n```\nsee `code` and [docs](http://x) ![img](a.png)";
        assert_eq!(count_words(text), 5);
    }

    #[test]
    fn test_count_words_keeps_emphasis_content() {
        assert_eq!(count_words("*one* ~~two~~ **three**"), 3);
    }

    #[test]
    fn test_reading_time_minimum() {
        assert_eq!(estimate_reading_time("", DEFAULT_WORDS_PER_MINUTE), 1);
        assert_eq!(estimate_reading_time("a few words", DEFAULT_WORDS_PER_MINUTE), 1);
    }

    #[test]
    fn test_reading_time_rounds() {
        let text = "word ".repeat(700);
        assert_eq!(estimate_reading_time(&text, 200), 4);
        assert_eq!(estimate_reading_time(&text, 100), 7);
    }

    #[test]
    fn test_reading_time_zero_wpm_does_not_divide_by_zero() {
        assert_eq!(estimate_reading_time("one two", 0), 2);
    }
}
