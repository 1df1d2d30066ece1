//! Markdown → HTML conversion and HTML tokenization
//!
//! Conversion goes through comrak and is only compiled with the
//! `html-pipeline` feature. Tokenization parses the HTML with scraper and
//! flattens the tree into the [`HtmlEvent`] stream the transducer consumes.

use scraper::{ElementRef, Html, Node};

use super::transducer::HtmlEvent;
use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion Options
// ─────────────────────────────────────────────────────────────────────────────

/// Markdown extensions enabled for the preview conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Enable GitHub Flavored Markdown tables
    pub tables: bool,
    /// Enable strikethrough syntax (~~text~~)
    pub strikethrough: bool,
    /// Render soft line breaks as `<br />`
    pub hard_breaks: bool,
    /// Replace straight quotes and dashes with typographic ones
    pub smart_punctuation: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            hard_breaks: true,
            smart_punctuation: true,
        }
    }
}

#[cfg(feature = "html-pipeline")]
impl ConversionOptions {
    /// Convert to comrak Options.
    ///
    /// Task lists stay disabled: `[ ]` and `[x]` reach the transducer as text
    /// and are turned into checkbox glyphs there.
    fn to_comrak_options(&self) -> comrak::Options {
        let mut options = comrak::Options::default();

        options.extension.table = self.tables;
        options.extension.strikethrough = self.strikethrough;
        options.extension.tasklist = false;

        options.parse.smart = self.smart_punctuation;
        options.render.hardbreaks = self.hard_breaks;

        options
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Whether this build can convert Markdown to HTML.
pub const fn converter_available() -> bool {
    cfg!(feature = "html-pipeline")
}

/// Convert Markdown source to an HTML fragment.
#[cfg(feature = "html-pipeline")]
pub fn markdown_to_html(markdown: &str, options: &ConversionOptions) -> Result<String> {
    Ok(comrak::markdown_to_html(markdown, &options.to_comrak_options()))
}

/// Convert Markdown source to an HTML fragment.
///
/// Always fails in builds without the `html-pipeline` feature.
#[cfg(not(feature = "html-pipeline"))]
pub fn markdown_to_html(_markdown: &str, _options: &ConversionOptions) -> Result<String> {
    Err(Error::ParseFailure("converter unavailable".to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokenization
// ─────────────────────────────────────────────────────────────────────────────

/// Parse an HTML fragment into a flat, document-ordered event stream.
///
/// Every element yields a start event, its children, then an end event, so
/// void elements such as `<br>` produce a start immediately followed by an
/// end. Comments and doctypes are skipped. Non-blank input that yields no
/// events at all (for example a lone comment) is reported as a failure.
pub fn tokenize(html: &str) -> Result<Vec<HtmlEvent>> {
    let fragment = Html::parse_fragment(html);

    let mut events = Vec::new();
    walk(fragment.root_element(), &mut events);
    if events.is_empty() && !html.trim().is_empty() {
        return Err(Error::TransductionFailure(
            "HTML produced no events".to_string(),
        ));
    }
    Ok(events)
}

fn walk(element: ElementRef<'_>, events: &mut Vec<HtmlEvent>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => events.push(HtmlEvent::Text(text.text.to_string())),
            Node::Element(elem) => {
                let tag = elem.name().to_string();
                let attrs = elem
                    .attrs()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect();
                events.push(HtmlEvent::Start {
                    tag: tag.clone(),
                    attrs,
                });
                if let Some(child_ref) = ElementRef::wrap(child) {
                    walk(child_ref, events);
                }
                events.push(HtmlEvent::End { tag });
            }
            _ => {}
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
