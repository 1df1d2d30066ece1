//! Case-insensitive literal matching
//!
//! Both sides are folded with Unicode lowercase mapping, one character at a
//! time, so reported offsets always point at character boundaries of the
//! original (unfolded) text even when folding changes byte lengths.

use std::ops::Range;

use crate::string_utils::byte_index_to_char_index;

/// A half-open byte range of one match in the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The byte range, for slicing the searched text.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The same span in character offsets of `text`.
    pub fn char_range(&self, text: &str) -> Range<usize> {
        byte_index_to_char_index(text, self.start)..byte_index_to_char_index(text, self.end)
    }
}

/// Find every case-insensitive occurrence of `query`.
///
/// Scanning is left to right and every attempt, hit or miss, advances one
/// character, so occurrences starting at different offsets are all reported
/// even when they overlap. An empty query matches nothing.
pub fn find_matches(text: &str, query: &str) -> Vec<MatchSpan> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for (start, _) in text.char_indices() {
        if let Some(end) = match_at(text, start, &needle) {
            matches.push(MatchSpan::new(start, end));
        }
    }
    matches
}

/// If `needle` matches at byte `start`, return the end byte of the match.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut remaining = needle;
    for (offset, ch) in text[start..].char_indices() {
        for folded in ch.to_lowercase() {
            match remaining.split_first() {
                Some((expected, rest)) if *expected == folded => remaining = rest,
                _ => return None,
            }
        }
        if remaining.is_empty() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
