//! In-document search with match highlighting
//!
//! [`SearchIndex`] holds the matches for the current query and a cursor into
//! them. It never keeps the document itself: every call that scans receives the
//! current text snapshot, and offsets go stale if the text changes until the
//! next [`SearchIndex::set_query`] or [`SearchIndex::refresh`].
//!
//! Highlighting is delegated to a [`HighlightSurface`], the display widget's
//! primitive for tagging text ranges. [`MarkupHighlighter`] is a surface for
//! widgets that only take markup.

mod highlight;
mod matcher;

pub use highlight::MarkupHighlighter;
pub use matcher::{find_matches, MatchSpan};

use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Surface
// ─────────────────────────────────────────────────────────────────────────────

/// The two highlight layers applied to matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// Every match
    Match,
    /// The match under the cursor
    Current,
}

/// What the search bar should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No active query
    Cleared,
    NoMatches,
    /// Right after a query: total count only
    Found { total: usize },
    /// After navigating: 0-based position of the current match
    Position { current: usize, total: usize },
}

impl SearchStatus {
    /// Text for the results label.
    pub fn label(&self) -> String {
        match self {
            SearchStatus::Cleared => String::new(),
            SearchStatus::NoMatches => "No matches".to_string(),
            SearchStatus::Found { total } => format!("{} matches", total),
            SearchStatus::Position { current, total } => format!("{} of {}", current + 1, total),
        }
    }
}

/// A text display that can tag ranges with highlight layers.
pub trait HighlightSurface {
    /// Remove `kind` over the whole document range.
    fn remove_highlight(&mut self, kind: HighlightKind);

    fn apply_highlight(&mut self, kind: HighlightKind, span: MatchSpan);

    fn scroll_into_view(&mut self, span: MatchSpan);

    fn show_status(&mut self, status: SearchStatus);
}

/// A surface that discards everything, for callers without a display.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl HighlightSurface for NullSurface {
    fn remove_highlight(&mut self, _kind: HighlightKind) {}
    fn apply_highlight(&mut self, _kind: HighlightKind, _span: MatchSpan) {}
    fn scroll_into_view(&mut self, _span: MatchSpan) {}
    fn show_status(&mut self, _status: SearchStatus) {}
}

// ─────────────────────────────────────────────────────────────────────────────
// Search Index
// ─────────────────────────────────────────────────────────────────────────────

/// Coarse state of a [`SearchIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Empty,
    HasMatches,
    NoMatches,
}

/// Matches for the active query plus a current-match cursor.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    query: String,
    matches: Vec<MatchSpan>,
    /// Index into `matches`; `None` exactly when `matches` is empty
    current: Option<usize>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[MatchSpan] {
        &self.matches
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_span(&self) -> Option<MatchSpan> {
        self.current.and_then(|idx| self.matches.get(idx).copied())
    }

    pub fn state(&self) -> SearchState {
        if self.query.is_empty() {
            SearchState::Empty
        } else if self.matches.is_empty() {
            SearchState::NoMatches
        } else {
            SearchState::HasMatches
        }
    }

    /// Replace the query and rescan `document`.
    ///
    /// Existing highlights are always removed first. On a hit the cursor moves
    /// to the first match, which is highlighted and scrolled into view.
    pub fn set_query(
        &mut self,
        document: &str,
        query: &str,
        surface: &mut impl HighlightSurface,
    ) -> SearchStatus {
        if query.is_empty() {
            self.clear(surface);
            return SearchStatus::Cleared;
        }

        remove_all_highlights(surface);
        self.query = query.to_string();
        self.matches = find_matches(document, query);
        debug!("Search '{}': {} matches", self.query, self.matches.len());

        if self.matches.is_empty() {
            self.current = None;
            let status = SearchStatus::NoMatches;
            surface.show_status(status);
            return status;
        }

        for span in &self.matches {
            surface.apply_highlight(HighlightKind::Match, *span);
        }
        self.move_cursor(0, surface);

        let status = SearchStatus::Found {
            total: self.matches.len(),
        };
        surface.show_status(status);
        status
    }

    /// Re-run the current query over a new snapshot of the document.
    ///
    /// The cursor keeps its position when it is still in range.
    pub fn refresh(&mut self, document: &str, surface: &mut impl HighlightSurface) -> SearchStatus {
        let previous = self.current;
        let query = std::mem::take(&mut self.query);
        let status = self.set_query(document, &query, surface);

        match (previous, self.matches.len()) {
            (Some(idx), total) if idx > 0 && idx < total => self.move_cursor(idx, surface),
            _ => status,
        }
    }

    /// Advance to the next match, wrapping around at the end.
    ///
    /// Returns `None` without touching the surface when there are no matches.
    pub fn next(&mut self, surface: &mut impl HighlightSurface) -> Option<usize> {
        let current = self.current?;
        let target = (current + 1) % self.matches.len();
        self.move_cursor(target, surface);
        Some(target)
    }

    /// Step back to the previous match, wrapping around at the start.
    pub fn previous(&mut self, surface: &mut impl HighlightSurface) -> Option<usize> {
        let current = self.current?;
        let total = self.matches.len();
        let target = (current + total - 1) % total;
        self.move_cursor(target, surface);
        Some(target)
    }

    /// Drop the query and all matches and remove every highlight.
    pub fn clear(&mut self, surface: &mut impl HighlightSurface) {
        remove_all_highlights(surface);
        self.query.clear();
        self.matches.clear();
        self.current = None;
        surface.show_status(SearchStatus::Cleared);
    }

    fn move_cursor(&mut self, target: usize, surface: &mut impl HighlightSurface) -> SearchStatus {
        self.current = Some(target);
        let span = self.matches[target];

        surface.remove_highlight(HighlightKind::Current);
        surface.apply_highlight(HighlightKind::Current, span);
        surface.scroll_into_view(span);

        let status = SearchStatus::Position {
            current: target,
            total: self.matches.len(),
        };
        surface.show_status(status);
        status
    }
}

fn remove_all_highlights(surface: &mut impl HighlightSurface) {
    surface.remove_highlight(HighlightKind::Match);
    surface.remove_highlight(HighlightKind::Current);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Tracks live highlights the way a text buffer's tag table would.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        match_spans: Vec<MatchSpan>,
        current_spans: Vec<MatchSpan>,
        scrolled_to: Vec<MatchSpan>,
        label: String,
    }

    impl HighlightSurface for RecordingSurface {
        fn remove_highlight(&mut self, kind: HighlightKind) {
            match kind {
                HighlightKind::Match => self.match_spans.clear(),
                HighlightKind::Current => self.current_spans.clear(),
            }
        }

        fn apply_highlight(&mut self, kind: HighlightKind, span: MatchSpan) {
            match kind {
                HighlightKind::Match => self.match_spans.push(span),
                HighlightKind::Current => self.current_spans.push(span),
            }
        }

        fn scroll_into_view(&mut self, span: MatchSpan) {
            self.scrolled_to.push(span);
        }

        fn show_status(&mut self, status: SearchStatus) {
            self.label = status.label();
        }
    }

    const DOC: &str = "cat cat cat";

    fn indexed(doc: &str, query: &str) -> (SearchIndex, RecordingSurface) {
        let mut index = SearchIndex::new();
        let mut surface = RecordingSurface::default();
        index.set_query(doc, query, &mut surface);
        (index, surface)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Querying
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_set_query_finds_all_matches() {
        let (index, surface) = indexed(DOC, "cat");
        assert_eq!(index.state(), SearchState::HasMatches);
        assert_eq!(
            index.matches(),
            &[
                MatchSpan::new(0, 3),
                MatchSpan::new(4, 7),
                MatchSpan::new(8, 11)
            ]
        );
        assert_eq!(index.current_index(), Some(0));
        assert_eq!(surface.match_spans.len(), 3);
        assert_eq!(surface.current_spans, vec![MatchSpan::new(0, 3)]);
        assert_eq!(surface.scrolled_to, vec![MatchSpan::new(0, 3)]);
        assert_eq!(surface.label, "3 matches");
    }

    #[test]
    fn test_set_query_is_case_insensitive() {
        let (index, _) = indexed("cat", "CAT");
        assert_eq!(index.matches().len(), 1);
    }

    #[test]
    fn test_no_matches() {
        let (index, surface) = indexed(DOC, "dog");
        assert_eq!(index.state(), SearchState::NoMatches);
        assert_eq!(index.current_index(), None);
        assert!(surface.match_spans.is_empty());
        assert!(surface.scrolled_to.is_empty());
        assert_eq!(surface.label, "No matches");
    }

    #[test]
    fn test_empty_query_is_empty_state() {
        let (index, surface) = indexed(DOC, "");
        assert_eq!(index.state(), SearchState::Empty);
        assert!(index.matches().is_empty());
        assert!(surface.match_spans.is_empty());
        assert!(surface.current_spans.is_empty());
        assert_eq!(surface.label, "");
    }

    #[test]
    fn test_new_query_replaces_highlights() {
        let (mut index, mut surface) = indexed(DOC, "cat");
        index.set_query(DOC, "at c", &mut surface);
        assert_eq!(
            surface.match_spans,
            vec![MatchSpan::new(1, 5), MatchSpan::new(5, 9)]
        );
        assert_eq!(surface.current_spans, vec![MatchSpan::new(1, 5)]);
    }

    #[test]
    fn test_emptying_query_removes_highlights() {
        let (mut index, mut surface) = indexed(DOC, "cat");
        index.next(&mut surface);
        index.set_query(DOC, "", &mut surface);
        assert_eq!(index.state(), SearchState::Empty);
        assert!(surface.match_spans.is_empty());
        assert!(surface.current_spans.is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_next_wraps_around() {
        let (mut index, mut surface) = indexed(DOC, "cat");
        assert_eq!(index.next(&mut surface), Some(1));
        assert_eq!(surface.label, "2 of 3");
        assert_eq!(index.next(&mut surface), Some(2));
        assert_eq!(index.next(&mut surface), Some(0));
        assert_eq!(index.current_index(), Some(0));
        assert_eq!(surface.current_spans, vec![MatchSpan::new(0, 3)]);
    }

    #[test]
    fn test_previous_wraps_around() {
        let (mut index, mut surface) = indexed(DOC, "cat");
        assert_eq!(index.previous(&mut surface), Some(2));
        assert_eq!(index.current_span(), Some(MatchSpan::new(8, 11)));
        assert_eq!(surface.scrolled_to.last(), Some(&MatchSpan::new(8, 11)));
        assert_eq!(surface.label, "3 of 3");
    }

    #[test]
    fn test_navigation_without_matches_is_noop() {
        let (mut index, mut surface) = indexed(DOC, "dog");
        assert_eq!(index.next(&mut surface), None);
        assert_eq!(index.previous(&mut surface), None);
        assert!(surface.scrolled_to.is_empty());

        let mut empty = SearchIndex::new();
        assert_eq!(empty.next(&mut NullSurface), None);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clearing and Refreshing
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_clear_removes_everything() {
        let (mut index, mut surface) = indexed(DOC, "cat");
        index.clear(&mut surface);
        assert_eq!(index.state(), SearchState::Empty);
        assert_eq!(index.query(), "");
        assert!(surface.match_spans.is_empty());
        assert!(surface.current_spans.is_empty());
        assert_eq!(surface.label, "");
    }

    #[test]
    fn test_refresh_keeps_cursor_in_range() {
        let (mut index, mut surface) = indexed(DOC, "cat");
        index.next(&mut surface);
        index.refresh("cat cat cat cat", &mut surface);
        assert_eq!(index.matches().len(), 4);
        assert_eq!(index.current_index(), Some(1));
        assert_eq!(surface.current_spans, vec![MatchSpan::new(4, 7)]);
    }

    #[test]
    fn test_refresh_resets_cursor_out_of_range() {
        let (mut index, mut surface) = indexed(DOC, "cat");
        index.previous(&mut surface);
        index.refresh("cat", &mut surface);
        assert_eq!(index.current_index(), Some(0));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SearchStatus::Cleared.label(), "");
        assert_eq!(SearchStatus::NoMatches.label(), "No matches");
        assert_eq!(SearchStatus::Found { total: 2 }.label(), "2 matches");
        assert_eq!(
            SearchStatus::Position {
                current: 0,
                total: 2
            }
            .label(),
            "1 of 2"
        );
    }
}
