//! Search state machine behavior against a recording surface.

use pretty_assertions::assert_eq;

use mdlive::search::{
    HighlightKind, HighlightSurface, MatchSpan, SearchIndex, SearchState, SearchStatus,
};

#[derive(Default)]
struct Surface {
    highlights: Vec<(HighlightKind, MatchSpan)>,
    scrolled: Vec<MatchSpan>,
    status: Option<SearchStatus>,
}

impl Surface {
    fn of_kind(&self, kind: HighlightKind) -> Vec<MatchSpan> {
        self.highlights
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, span)| *span)
            .collect()
    }
}

impl HighlightSurface for Surface {
    fn remove_highlight(&mut self, kind: HighlightKind) {
        self.highlights.retain(|(k, _)| *k != kind);
    }

    fn apply_highlight(&mut self, kind: HighlightKind, span: MatchSpan) {
        self.highlights.push((kind, span));
    }

    fn scroll_into_view(&mut self, span: MatchSpan) {
        self.scrolled.push(span);
    }

    fn show_status(&mut self, status: SearchStatus) {
        self.status = Some(status);
    }
}

#[test]
fn test_cat_cat_cat() {
    let doc = "cat cat cat";
    let mut surface = Surface::default();
    let mut index = SearchIndex::new();

    let status = index.set_query(doc, "cat", &mut surface);
    assert_eq!(status, SearchStatus::Found { total: 3 });
    assert_eq!(
        index.matches(),
        &[
            MatchSpan::new(0, 3),
            MatchSpan::new(4, 7),
            MatchSpan::new(8, 11)
        ]
    );
    assert_eq!(index.current_index(), Some(0));
    assert_eq!(surface.of_kind(HighlightKind::Match).len(), 3);
    assert_eq!(surface.of_kind(HighlightKind::Current), vec![MatchSpan::new(0, 3)]);
    assert_eq!(surface.scrolled, vec![MatchSpan::new(0, 3)]);

    assert_eq!(index.next(&mut surface), Some(1));
    assert_eq!(index.next(&mut surface), Some(2));
    assert_eq!(index.next(&mut surface), Some(0));
    assert_eq!(index.previous(&mut surface), Some(2));
    assert_eq!(surface.of_kind(HighlightKind::Current), vec![MatchSpan::new(8, 11)]);
    assert_eq!(surface.status.map(|s| s.label()), Some("3 of 3".to_string()));
}

#[test]
fn test_case_insensitive_query() {
    let mut index = SearchIndex::new();
    index.set_query("cat", "CAT", &mut Surface::default());
    assert_eq!(index.matches().len(), 1);
    assert_eq!(index.state(), SearchState::HasMatches);
}

#[test]
fn test_empty_query_clears_everything() {
    let mut surface = Surface::default();
    let mut index = SearchIndex::new();
    index.set_query("cat cat", "cat", &mut surface);

    let status = index.set_query("cat cat", "", &mut surface);
    assert_eq!(status, SearchStatus::Cleared);
    assert_eq!(index.state(), SearchState::Empty);
    assert!(index.matches().is_empty());
    assert!(surface.highlights.is_empty());
}

#[test]
fn test_no_matches_is_not_an_error() {
    let mut surface = Surface::default();
    let mut index = SearchIndex::new();
    index.set_query("cat", "cat", &mut surface);

    let status = index.set_query("cat", "dog", &mut surface);
    assert_eq!(status, SearchStatus::NoMatches);
    assert_eq!(status.label(), "No matches");
    assert_eq!(index.state(), SearchState::NoMatches);
    assert!(surface.highlights.is_empty());
    assert_eq!(index.next(&mut surface), None);
    assert_eq!(index.previous(&mut surface), None);
}
