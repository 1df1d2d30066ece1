//! Document outline and table of contents
//!
//! Heading extraction works on the raw source, line by line, so it stays
//! usable when the HTML pipeline is unavailable. Lines inside fenced code
//! blocks are skipped.

use regex::Regex;
use std::sync::LazyLock;

static ANCHOR_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-]").expect("Invalid anchor regex"));

/// Title line of a generated table of contents.
pub const TOC_TITLE: &str = "## Table of Contents";

// ─────────────────────────────────────────────────────────────────────────────
// Heading
// ─────────────────────────────────────────────────────────────────────────────

/// One ATX heading found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6 for H1-H6)
    pub level: u8,
    pub title: String,
    /// Line number in the source document (1-indexed)
    pub line: usize,
}

impl Heading {
    /// Get the indentation level (0 for H1, 1 for H2, etc.)
    pub fn indent_level(&self) -> usize {
        self.level.saturating_sub(1) as usize
    }

    /// Link anchor: lowercase, spaces as `-`, only word characters and `-` kept.
    pub fn anchor(&self) -> String {
        let lowered = self.title.to_lowercase().replace(' ', "-");
        ANCHOR_STRIP.replace_all(&lowered, "").into_owned()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Extraction
// ─────────────────────────────────────────────────────────────────────────────

/// Extract every heading from raw Markdown text.
pub fn extract_headings(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_code_block = false;

    for (idx, line) in text.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }
        if let Some((level, title)) = parse_heading(trimmed) {
            headings.push(Heading {
                level,
                title: title.to_string(),
                line: idx + 1,
            });
        }
    }

    headings
}

/// Parse a trimmed line as a heading: 1-6 `#`, a space or tab, then a
/// non-empty title.
fn parse_heading(trimmed: &str) -> Option<(u8, &str)> {
    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    let rest = &trimmed[hash_count..];
    if !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }

    let title = rest.trim();
    if title.is_empty() {
        return None;
    }
    Some((hash_count as u8, title))
}

/// Build a Markdown table of contents linking to every heading.
///
/// Returns an empty string when the document has no headings.
pub fn generate_toc(text: &str) -> String {
    let headings = extract_headings(text);
    if headings.is_empty() {
        return String::new();
    }

    let mut toc = format!("{}\n\n", TOC_TITLE);
    for heading in &headings {
        toc.push_str(&format!(
            "{}- [{}](#{})\n",
            "  ".repeat(heading.indent_level()),
            heading.title,
            heading.anchor()
        ));
    }
    toc.push('\n');
    toc
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
