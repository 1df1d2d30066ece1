//! Styled markup vocabulary
//!
//! Rendered output is Pango-style inline markup: `<span>` elements carrying
//! presentation attributes, the short `<s>`/`<u>` tags, and entity-escaped
//! literal text. This module owns both directions of that vocabulary:
//!
//! - [`SpanAttrs`] builds opening tags from the static theme tables
//! - [`escape_markup`] escapes literal text before any tag is injected
//! - [`parse_spans`] decodes finished markup back into [`MarkupSpan`] runs so a
//!   display surface that does not speak the tag language can still show
//!   styled text

use scraper::{ElementRef, Html, Node};

/// Closing tag for every [`SpanAttrs`] span.
pub const SPAN_CLOSE: &str = "</span>";

// ─────────────────────────────────────────────────────────────────────────────
// Escaping
// ─────────────────────────────────────────────────────────────────────────────

/// Escape `&`, `<` and `>` to their entity forms.
///
/// Must run before any markup is injected into the same string, otherwise
/// the injected tags would be escaped as well.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ─────────────────────────────────────────────────────────────────────────────
// Span Attributes
// ─────────────────────────────────────────────────────────────────────────────

/// Font size of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// Absolute size in thousandths of a point
    Units(u32),
    /// The surface's "small" relative size
    Small,
}

/// A set of presentation attributes for one `<span>`.
///
/// Theme palettes are tables of these, built with the `const` builder methods
/// so the whole table lives in static memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanAttrs {
    pub font_family: Option<&'static str>,
    pub size: Option<FontSize>,
    pub weight: Option<&'static str>,
    pub italic: bool,
    pub foreground: Option<&'static str>,
    pub background: Option<&'static str>,
    pub underline: bool,
    pub strikethrough: bool,
}

impl SpanAttrs {
    /// An attribute set with nothing enabled.
    pub const fn new() -> Self {
        Self {
            font_family: None,
            size: None,
            weight: None,
            italic: false,
            foreground: None,
            background: None,
            underline: false,
            strikethrough: false,
        }
    }

    pub const fn family(mut self, family: &'static str) -> Self {
        self.font_family = Some(family);
        self
    }

    pub const fn size(mut self, units: u32) -> Self {
        self.size = Some(FontSize::Units(units));
        self
    }

    pub const fn small(mut self) -> Self {
        self.size = Some(FontSize::Small);
        self
    }

    pub const fn weight(mut self, weight: &'static str) -> Self {
        self.weight = Some(weight);
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn fg(mut self, color: &'static str) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the foreground only when a colour is given.
    pub const fn fg_opt(mut self, color: Option<&'static str>) -> Self {
        self.foreground = color;
        self
    }

    pub const fn bg(mut self, color: &'static str) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Render the opening `<span ...>` tag.
    pub fn open(&self) -> String {
        let mut tag = String::from("<span");
        if let Some(family) = self.font_family {
            push_attr(&mut tag, "font_family", family);
        }
        match self.size {
            Some(FontSize::Units(units)) => push_attr(&mut tag, "size", &units.to_string()),
            Some(FontSize::Small) => push_attr(&mut tag, "size", "small"),
            None => {}
        }
        if let Some(weight) = self.weight {
            push_attr(&mut tag, "weight", weight);
        }
        if self.italic {
            push_attr(&mut tag, "style", "italic");
        }
        if let Some(fg) = self.foreground {
            push_attr(&mut tag, "foreground", fg);
        }
        if let Some(bg) = self.background {
            push_attr(&mut tag, "background", bg);
        }
        if self.underline {
            push_attr(&mut tag, "underline", "single");
        }
        if self.strikethrough {
            push_attr(&mut tag, "strikethrough", "true");
        }
        tag.push('>');
        tag
    }

    /// Wrap already-escaped markup in this span.
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{}{}", self.open(), inner, SPAN_CLOSE)
    }
}

fn push_attr(tag: &mut String, name: &str, value: &str) {
    tag.push(' ');
    tag.push_str(name);
    tag.push_str("=\"");
    tag.push_str(value);
    tag.push('"');
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoded Spans
// ─────────────────────────────────────────────────────────────────────────────

/// The set of style attributes active over a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub weight: Option<String>,
    pub size: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub font_family: Option<String>,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    /// Whether the weight is heavier than normal.
    pub fn is_bold(&self) -> bool {
        match self.weight.as_deref() {
            Some(w) => match w.parse::<u32>() {
                Ok(numeric) => numeric >= 600,
                Err(_) => matches!(
                    w,
                    "bold" | "semibold" | "ultrabold" | "heavy" | "ultraheavy"
                ),
            },
            None => false,
        }
    }

    /// Whether the run uses a monospace font family.
    pub fn is_monospace(&self) -> bool {
        self.font_family.is_some()
    }

    /// Whether no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == TextStyle::default()
    }

    fn apply_span_attr(&mut self, name: &str, value: &str) {
        match name {
            "weight" | "font_weight" => self.weight = Some(value.to_string()),
            "size" | "font_size" => self.size = Some(value.to_string()),
            "style" | "font_style" => self.italic = value == "italic" || value == "oblique",
            "foreground" | "fgcolor" | "color" => self.foreground = Some(value.to_string()),
            "background" | "bgcolor" => self.background = Some(value.to_string()),
            "font_family" | "face" | "font" => self.font_family = Some(value.to_string()),
            "underline" => self.underline = value != "none",
            "strikethrough" => self.strikethrough = value == "true",
            _ => {}
        }
    }
}

/// A contiguous run of output text plus the style active over it.
///
/// Concatenating the `text` of every span in order yields the document's
/// rendered plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub style: TextStyle,
}

/// Decode markup into styled text runs.
///
/// Adjacent runs with identical style are merged. Entities are decoded, so
/// span text is literal display text.
pub fn parse_spans(markup: &str) -> Vec<MarkupSpan> {
    let fragment = Html::parse_fragment(markup);
    let mut spans = Vec::new();
    collect_spans(fragment.root_element(), &TextStyle::default(), &mut spans);
    spans
}

/// Concatenated display text of some markup, with all styling dropped.
pub fn plain_text(markup: &str) -> String {
    parse_spans(markup).into_iter().map(|s| s.text).collect()
}

fn collect_spans(element: ElementRef<'_>, inherited: &TextStyle, spans: &mut Vec<MarkupSpan>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_run(spans, text.text.as_ref(), inherited),
            Node::Element(elem) => {
                let mut style = inherited.clone();
                match elem.name() {
                    "b" | "strong" => style.weight = Some("bold".to_string()),
                    "i" | "em" => style.italic = true,
                    "s" | "del" => style.strikethrough = true,
                    "u" => style.underline = true,
                    "tt" => style.font_family = Some("monospace".to_string()),
                    "span" => {
                        for (name, value) in elem.attrs() {
                            style.apply_span_attr(name, value);
                        }
                    }
                    _ => {}
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_spans(child_ref, &style, spans);
                }
            }
            _ => {}
        }
    }
}

fn push_run(spans: &mut Vec<MarkupSpan>, text: &str, style: &TextStyle) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = spans.last_mut() {
        if last.style == *style {
            last.text.push_str(text);
            return;
        }
    }
    spans.push(MarkupSpan {
        text: text.to_string(),
        style: style.clone(),
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
