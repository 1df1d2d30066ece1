//! Highlight surface that paints matches into markup
//!
//! Used when the display widget consumes markup rather than exposing a
//! range-tagging primitive. Colours come from the persisted search settings.

use crate::config::SearchSettings;
use crate::markup::{escape_markup, SPAN_CLOSE};

use super::{HighlightKind, HighlightSurface, MatchSpan, SearchStatus};

/// Records highlight requests and renders them as background spans.
#[derive(Debug, Clone)]
pub struct MarkupHighlighter {
    match_background: String,
    current_background: String,
    matches: Vec<MatchSpan>,
    current: Option<MatchSpan>,
    scrolled_to: Option<MatchSpan>,
    status: SearchStatus,
}

impl MarkupHighlighter {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            match_background: settings.match_background.clone(),
            current_background: settings.current_background.clone(),
            matches: Vec::new(),
            current: None,
            scrolled_to: None,
            status: SearchStatus::Cleared,
        }
    }

    /// The last status shown.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// The span most recently scrolled into view.
    pub fn scrolled_to(&self) -> Option<MatchSpan> {
        self.scrolled_to
    }

    /// Escape `text` and wrap highlighted ranges in background spans.
    ///
    /// Overlapping matches merge into one run; the current match wins over
    /// the plain match colour where they overlap.
    pub fn render(&self, text: &str) -> String {
        let mut bounds: Vec<usize> = vec![0, text.len()];
        for span in self.matches.iter().chain(self.current.iter()) {
            bounds.push(span.start.min(text.len()));
            bounds.push(span.end.min(text.len()));
        }
        bounds.sort_unstable();
        bounds.dedup();

        let mut out = String::with_capacity(text.len());
        let mut open: Option<HighlightKind> = None;
        for pair in bounds.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let kind = self.kind_at(start, end);
            if kind != open {
                if open.is_some() {
                    out.push_str(SPAN_CLOSE);
                }
                if let Some(kind) = kind {
                    out.push_str(&format!(
                        "<span background=\"{}\">",
                        escape_markup(self.background(kind))
                    ));
                }
                open = kind;
            }
            out.push_str(&escape_markup(&text[start..end]));
        }
        if open.is_some() {
            out.push_str(SPAN_CLOSE);
        }
        out
    }

    fn kind_at(&self, start: usize, end: usize) -> Option<HighlightKind> {
        let covers = |span: &MatchSpan| span.start <= start && end <= span.end;
        if self.current.as_ref().is_some_and(covers) {
            Some(HighlightKind::Current)
        } else if self.matches.iter().any(covers) {
            Some(HighlightKind::Match)
        } else {
            None
        }
    }

    fn background(&self, kind: HighlightKind) -> &str {
        match kind {
            HighlightKind::Match => &self.match_background,
            HighlightKind::Current => &self.current_background,
        }
    }
}

impl HighlightSurface for MarkupHighlighter {
    fn remove_highlight(&mut self, kind: HighlightKind) {
        match kind {
            HighlightKind::Match => self.matches.clear(),
            HighlightKind::Current => self.current = None,
        }
    }

    fn apply_highlight(&mut self, kind: HighlightKind, span: MatchSpan) {
        match kind {
            HighlightKind::Match => self.matches.push(span),
            HighlightKind::Current => self.current = Some(span),
        }
    }

    fn scroll_into_view(&mut self, span: MatchSpan) {
        self.scrolled_to = Some(span);
    }

    fn show_status(&mut self, status: SearchStatus) {
        self.status = status;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
