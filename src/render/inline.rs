//! Inline formatting for a single line of Markdown
//!
//! Turns emphasis, inline code, strikethrough and link syntax on one line into
//! themed markup. The passes run in a fixed order:
//!
//! 1. entity escaping
//! 2. `**bold**`
//! 3. `*italic*` (a lone `*` not touching another `*`)
//! 4. `` `code` ``
//! 5. `~~strike~~`
//! 6. `[label](url)` (the URL is dropped)
//!
//! Escaping must come first so injected tags survive, and bold must run before
//! italic so `**x**` is never read as nested single stars. Unterminated markers
//! stay as literal text.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::markup::escape_markup;
use crate::theme::Palette;

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*").expect("Invalid bold regex"));

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+?)`").expect("Invalid inline code regex"));

static STRIKE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~\n]+?)~~").expect("Invalid strikethrough regex"));

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+?)\]\(([^)]+?)\)").expect("Invalid link regex")
});

/// Format one line of Markdown into markup using the given palette.
pub fn format_inline(line: &str, palette: &Palette) -> String {
    let text = escape_markup(line);

    let text = BOLD_PATTERN.replace_all(&text, |caps: &Captures| palette.strong.wrap(&caps[1]));
    let text = replace_emphasis(&text, palette);
    let text = CODE_PATTERN.replace_all(&text, |caps: &Captures| {
        palette.inline_code_wrap(&caps[1])
    });
    let text = STRIKE_PATTERN.replace_all(&text, "<s>$1</s>");
    let text = LINK_PATTERN.replace_all(&text, |caps: &Captures| palette.link.wrap(&caps[1]));

    text.into_owned()
}

/// Wrap `*text*` runs whose stars do not touch another `*`.
///
/// The `regex` crate has no lookaround, so the scan is done by hand. A match
/// opens on a `*` not preceded by `*`, takes at least one byte that is neither
/// `*` nor a newline, and closes on a `*` not followed by `*`.
fn replace_emphasis(text: &str, palette: &Palette) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let opens = bytes[i] == b'*' && (i == 0 || bytes[i - 1] != b'*');
        if opens {
            if let Some(close) = emphasis_close(bytes, i + 1) {
                out.push_str(&text[copied..i]);
                out.push_str(&palette.emphasis.wrap(&text[i + 1..close]));
                i = close + 1;
                copied = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&text[copied..]);
    out
}

fn emphasis_close(bytes: &[u8], start: usize) -> Option<usize> {
    let end = bytes[start..]
        .iter()
        .position(|b| *b == b'*' || *b == b'\n')
        .map(|offset| start + offset)?;

    if end == start || bytes[end] != b'*' || bytes.get(end + 1) == Some(&b'*') {
        return None;
    }
    Some(end)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
