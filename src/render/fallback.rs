//! Line-oriented fallback renderer
//!
//! Used when the Markdown→HTML pipeline is unavailable or fails. Each physical
//! line is classified on its own; the only state carried between lines is
//! whether a fenced code block is open. Output lines are joined with `\n` and
//! only fence delimiter lines are dropped.

use regex::Regex;
use std::sync::LazyLock;

use super::inline::format_inline;
use crate::markup::{escape_markup, SPAN_CLOSE};
use crate::theme::{Palette, BULLET_GLYPH, CHECKED_GLYPH, UNCHECKED_GLYPH};

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) (.*)$").expect("Invalid heading regex"));

static BULLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*+])\s+(.*)$").expect("Invalid bullet regex"));

static ORDERED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+\.)\s+(.*)$").expect("Invalid ordered list regex"));

const FENCE: &str = "```";

/// How a single source line is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Fence,
    Code(&'a str),
    Heading { level: u8, text: &'a str },
    Task { indent: &'a str, checked: bool, text: &'a str },
    Bullet { indent: &'a str, text: &'a str },
    Ordered { indent: &'a str, number: &'a str, text: &'a str },
    Quote(&'a str),
    Rule,
    Paragraph(&'a str),
    Blank,
}

fn classify(line: &str, in_code_block: bool) -> Line<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with(FENCE) {
        return Line::Fence;
    }
    if in_code_block {
        return Line::Code(line);
    }
    if let Some(caps) = HEADING_PATTERN.captures(trimmed) {
        let (Some(hashes), Some(text)) = (caps.get(1), caps.get(2)) else {
            return Line::Paragraph(trimmed);
        };
        return Line::Heading {
            level: hashes.len() as u8,
            text: text.as_str(),
        };
    }
    if let Some(caps) = BULLET_PATTERN.captures(line) {
        let indent = caps.get(1).map_or("", |m| m.as_str());
        let content = caps.get(3).map_or("", |m| m.as_str());
        if let Some(rest) = content.strip_prefix("[ ]") {
            return Line::Task {
                indent,
                checked: false,
                text: rest.trim(),
            };
        }
        if let Some(rest) = content
            .strip_prefix("[x]")
            .or_else(|| content.strip_prefix("[X]"))
        {
            return Line::Task {
                indent,
                checked: true,
                text: rest.trim(),
            };
        }
        return Line::Bullet {
            indent,
            text: content,
        };
    }
    if let Some(caps) = ORDERED_PATTERN.captures(line) {
        return Line::Ordered {
            indent: caps.get(1).map_or("", |m| m.as_str()),
            number: caps.get(2).map_or("", |m| m.as_str()),
            text: caps.get(3).map_or("", |m| m.as_str()),
        };
    }
    if let Some(rest) = trimmed.strip_prefix("> ") {
        return Line::Quote(rest);
    }
    if trimmed == "---" {
        return Line::Rule;
    }
    if trimmed.is_empty() {
        Line::Blank
    } else {
        Line::Paragraph(trimmed)
    }
}

/// Render a whole document line by line.
pub fn render_fallback(document: &str, palette: &Palette) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut in_code_block = false;

    for raw in document.split('\n') {
        let rendered = match classify(raw, in_code_block) {
            Line::Fence => {
                in_code_block = !in_code_block;
                if in_code_block {
                    palette.code_block.open()
                } else {
                    SPAN_CLOSE.to_string()
                }
            }
            Line::Code(text) => escape_markup(text),
            Line::Heading { level, text } => palette.heading(level).wrap(&format_inline(text, palette)),
            Line::Task {
                indent,
                checked,
                text,
            } => {
                let body = format_inline(text, palette);
                if checked {
                    format!("{}{}<s>{}</s>", indent, palette.list_glyph(CHECKED_GLYPH), body)
                } else {
                    format!("{}{}{}", indent, palette.list_glyph(UNCHECKED_GLYPH), body)
                }
            }
            Line::Bullet { indent, text } => format!(
                "{}{}{}",
                indent,
                palette.list_glyph(BULLET_GLYPH),
                format_inline(text, palette)
            ),
            Line::Ordered {
                indent,
                number,
                text,
            } => format!(
                "{}{}{}",
                indent,
                palette.list_glyph(&format!("{} ", number)),
                format_inline(text, palette)
            ),
            Line::Quote(text) => format!(
                "{}{}{}",
                palette.quote_open(),
                format_inline(text, palette),
                palette.quote_close()
            ),
            Line::Rule => palette.rule(),
            Line::Paragraph(text) => format_inline(text, palette),
            Line::Blank => String::new(),
        };
        lines.push(rendered);
    }

    if in_code_block {
        lines.push(SPAN_CLOSE.to_string());
    }

    lines.join("\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
