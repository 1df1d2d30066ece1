//! HTML event stream → styled markup
//!
//! The transducer walks a flat stream of start/end/text events and appends
//! themed markup to an output buffer. All state lives in an explicit
//! [`TagContext`] passed to each handler, so tests can drive it with
//! hand-built event sequences instead of a real tokenizer.

use regex::Regex;
use std::sync::LazyLock;

use super::html::tokenize;
use crate::error::{Error, Result};
use crate::markup::{escape_markup, SpanAttrs, SPAN_CLOSE};
use crate::theme::{
    Palette, BULLET_GLYPH, CHECKED_GLYPH, IMAGE_GLYPH, ORDERED_GLYPH, UNCHECKED_GLYPH,
};

static TASK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*\[([ xX])\](?:\s+(.*))?$").expect("Invalid task marker regex")
});

static STRIKE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~]+?)~~").expect("Invalid strikethrough regex"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank line regex"));

const TABLE_SPAN: SpanAttrs = SpanAttrs::new().family("monospace");
const TABLE_HEADER_SPAN: SpanAttrs = SpanAttrs::new().weight("bold");

/// Containers whose whitespace-only text children are layout noise.
const STRUCTURAL_TAGS: &[&str] = &[
    "ul",
    "ol",
    "table",
    "thead",
    "tbody",
    "tfoot",
    "tr",
    "blockquote",
];

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// One event from an HTML tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlEvent {
    Start {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    End {
        tag: String,
    },
    Text(String),
}

impl HtmlEvent {
    /// A start tag without attributes.
    pub fn start(tag: &str) -> Self {
        HtmlEvent::Start {
            tag: tag.to_string(),
            attrs: Vec::new(),
        }
    }

    pub fn end(tag: &str) -> Self {
        HtmlEvent::End {
            tag: tag.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        HtmlEvent::Text(text.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Context
// ─────────────────────────────────────────────────────────────────────────────

/// A list item whose marker has not been written yet.
///
/// The marker is deferred until the item's first content so a leading
/// `[ ]`/`[x]` can replace the bullet with a checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingItem {
    indent: String,
    ordered: bool,
}

/// Transducer state carried across events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagContext {
    /// Currently open tags, innermost last
    stack: Vec<String>,
    list_depth: usize,
    in_code_block: bool,
    table_column: usize,
    heading_level: Option<u8>,
    pending_item: Option<PendingItem>,
    /// List depths of checked task items whose `<s>` is still open
    struck_items: Vec<usize>,
}

impl TagContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_depth(&self) -> usize {
        self.list_depth
    }

    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    pub fn open_tags(&self) -> &[String] {
        &self.stack
    }

    fn top(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// The tag enclosing the innermost one.
    fn parent(&self) -> Option<&str> {
        self.stack
            .len()
            .checked_sub(2)
            .map(|idx| self.stack[idx].as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry Points
// ─────────────────────────────────────────────────────────────────────────────

/// Tokenize `html` and transduce it with the given palette.
pub fn transduce(html: &str, palette: &Palette) -> Result<String> {
    let events = tokenize(html)?;
    transduce_events(&events, palette)
}

/// Transduce an already tokenized event stream.
pub fn transduce_events(events: &[HtmlEvent], palette: &Palette) -> Result<String> {
    let mut ctx = TagContext::new();
    let mut out = String::new();
    for event in events {
        handle_event(&mut ctx, &mut out, palette, event)?;
    }
    finish(&mut ctx, out, palette)
}

/// Apply one event to the context and output buffer.
pub fn handle_event(
    ctx: &mut TagContext,
    out: &mut String,
    palette: &Palette,
    event: &HtmlEvent,
) -> Result<()> {
    match event {
        HtmlEvent::Start { tag, attrs } => {
            start_tag(ctx, out, palette, tag, attrs);
            Ok(())
        }
        HtmlEvent::End { tag } => end_tag(ctx, out, palette, tag),
        HtmlEvent::Text(data) => {
            text(ctx, out, palette, data);
            Ok(())
        }
    }
}

/// Flush pending state, validate the final context and post-process.
pub fn finish(ctx: &mut TagContext, mut out: String, palette: &Palette) -> Result<String> {
    flush_pending_item(ctx, &mut out, palette);
    for _ in ctx.struck_items.drain(..) {
        out.push_str("</s>");
    }

    if ctx.in_code_block {
        return Err(Error::TransductionFailure("unterminated <pre>".to_string()));
    }

    let collapsed = BLANK_RUNS.replace_all(&out, "\n\n");
    Ok(collapsed.trim().to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Write the deferred list marker, if any. Returns whether one was written.
fn flush_pending_item(ctx: &mut TagContext, out: &mut String, palette: &Palette) -> bool {
    let Some(item) = ctx.pending_item.take() else {
        return false;
    };
    let glyph = if item.ordered {
        ORDERED_GLYPH
    } else {
        BULLET_GLYPH
    };
    out.push_str(&item.indent);
    out.push_str(&palette.list_glyph(glyph));
    true
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn start_tag(
    ctx: &mut TagContext,
    out: &mut String,
    palette: &Palette,
    tag: &str,
    attrs: &[(String, String)],
) {
    // A loose item's content sits in a <p>; its marker waits for the first text.
    if tag != "li" && tag != "p" {
        flush_pending_item(ctx, out, palette);
    }
    ctx.stack.push(tag.to_string());

    if let Some(level) = heading_level(tag) {
        ctx.heading_level = Some(level);
        out.push('\n');
        out.push_str(&palette.heading(level).open());
        return;
    }

    match tag {
        "strong" | "b" => out.push_str(&palette.strong.open()),
        "em" | "i" => out.push_str(&palette.emphasis.open()),
        "u" => out.push_str("<u>"),
        "del" | "s" => out.push_str("<s>"),
        "a" => out.push_str(&palette.link.open()),
        "code" => {
            if !ctx.in_code_block {
                out.push_str(&palette.inline_code_open());
            }
        }
        "pre" => {
            ctx.in_code_block = true;
            out.push('\n');
            out.push_str(&palette.code_block.open());
        }
        "p" => {
            // A paragraph opening a list item or quote continues that line.
            let continues_line =
                ctx.pending_item.is_some() || out.ends_with(&palette.quote_open());
            if !continues_line && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        "br" => out.push('\n'),
        "hr" => {
            out.push('\n');
            out.push_str(&palette.rule());
            out.push('\n');
        }
        "blockquote" => {
            out.push('\n');
            out.push_str(&palette.quote_open());
        }
        "ul" | "ol" => {
            ctx.list_depth += 1;
            out.push('\n');
        }
        "li" => {
            ctx.pending_item = Some(PendingItem {
                indent: "  ".repeat(ctx.list_depth.saturating_sub(1)),
                ordered: ctx.parent() == Some("ol"),
            });
        }
        "img" => {
            let alt = attrs
                .iter()
                .find(|(name, _)| name == "alt")
                .map(|(_, value)| value.as_str())
                .filter(|alt| !alt.is_empty())
                .unwrap_or("Image");
            out.push_str(&format!(
                "\n{} [Image: {}]\n",
                IMAGE_GLYPH,
                escape_markup(alt)
            ));
        }
        "table" => {
            out.push('\n');
            out.push_str(&TABLE_SPAN.open());
        }
        "tr" => {
            ctx.table_column = 0;
            out.push('\n');
        }
        "td" | "th" => {
            if ctx.table_column > 0 {
                out.push_str(" | ");
            }
            ctx.table_column += 1;
            if tag == "th" {
                out.push_str(&TABLE_HEADER_SPAN.open());
            }
        }
        _ => {}
    }
}

fn end_tag(ctx: &mut TagContext, out: &mut String, palette: &Palette, tag: &str) -> Result<()> {
    flush_pending_item(ctx, out, palette);

    if ctx.top() == Some(tag) {
        ctx.stack.pop();
    }

    if heading_level(tag).is_some() {
        out.push_str(SPAN_CLOSE);
        out.push('\n');
        if let Some(rule) = ctx.heading_level.and_then(|level| palette.heading_rule(level)) {
            out.push_str(&rule);
            out.push('\n');
        }
        ctx.heading_level = None;
        return Ok(());
    }

    match tag {
        "strong" | "b" | "em" | "i" | "a" | "th" => out.push_str(SPAN_CLOSE),
        "u" => out.push_str("</u>"),
        "del" | "s" => out.push_str("</s>"),
        "code" => {
            if !ctx.in_code_block {
                out.push_str(palette.inline_code_close());
            }
        }
        "pre" => {
            ctx.in_code_block = false;
            out.push_str(SPAN_CLOSE);
            out.push('\n');
        }
        "p" => out.push('\n'),
        "li" => {
            if ctx.struck_items.last() == Some(&ctx.list_depth) {
                ctx.struck_items.pop();
                let kept = out.trim_end_matches('\n').len();
                out.insert_str(kept, "</s>");
            }
            out.push('\n');
        }
        "blockquote" => {
            let kept = out.trim_end_matches('\n').len();
            out.truncate(kept);
            out.push_str(&palette.quote_close());
            out.push('\n');
        }
        "ul" | "ol" => {
            if ctx.list_depth == 0 {
                return Err(Error::TransductionFailure(format!(
                    "</{}> without an open list",
                    tag
                )));
            }
            ctx.list_depth -= 1;
            out.push('\n');
        }
        "table" => {
            out.push_str(SPAN_CLOSE);
            out.push('\n');
        }
        _ => {}
    }
    Ok(())
}

fn text(ctx: &mut TagContext, out: &mut String, palette: &Palette, data: &str) {
    let blank = data.trim().is_empty();

    if ctx.pending_item.is_some() {
        if blank {
            return;
        }
        if let Some(caps) = TASK_PATTERN.captures(data) {
            let checked = caps.get(1).is_some_and(|m| m.as_str() != " ");
            let rest = caps.get(2).map_or("", |m| m.as_str());
            if let Some(item) = ctx.pending_item.take() {
                let glyph = if checked {
                    CHECKED_GLYPH
                } else {
                    UNCHECKED_GLYPH
                };
                out.push_str(&item.indent);
                out.push_str(&palette.list_glyph(glyph));
            }
            if checked {
                // Closed at the item's </li> so trailing inline markup is struck too.
                out.push_str("<s>");
                ctx.struck_items.push(ctx.list_depth);
            }
            out.push_str(&escape_markup(rest));
            return;
        }
        flush_pending_item(ctx, out, palette);
    }

    if blank && ctx.top().is_some_and(|top| STRUCTURAL_TAGS.contains(&top)) {
        return;
    }

    let escaped = escape_markup(data);
    if ctx.in_code_block {
        out.push_str(&escaped);
    } else {
        out.push_str(&STRIKE_PATTERN.replace_all(&escaped, "<s>$1</s>"));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
