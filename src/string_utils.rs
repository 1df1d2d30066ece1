//! UTF-8 Safe String Utilities
//!
//! Search results are byte offsets into the document snapshot, but many
//! rich-text surfaces address their buffers by character. These helpers
//! convert between the two without ever slicing inside a multi-byte
//! character.
//!
//! # Example
//! ```ignore
//! use crate::string_utils::byte_index_to_char_index;
//!
//! let text = "Hei på deg"; // 'å' is 2 bytes
//! assert_eq!(byte_index_to_char_index(text, 7), 6);
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Character Boundary Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Returns the largest index that is less than or equal to `index`
/// and is on a UTF-8 character boundary.
///
/// If `index` is greater than the string length, returns the string length.
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }

    let bytes = s.as_bytes();
    let mut i = index;
    while i > 0 && !is_utf8_char_start(bytes[i]) {
        i -= 1;
    }
    i
}

/// Continuation bytes look like `10xxxxxx`; everything else starts a character.
#[inline]
fn is_utf8_char_start(byte: u8) -> bool {
    (byte & 0xC0) != 0x80
}

// ─────────────────────────────────────────────────────────────────────────────
// Index Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a byte index to a character index.
///
/// Returns the number of characters before the given byte index.
/// If the byte index is in the middle of a character, it counts
/// up to (but not including) that character.
pub fn byte_index_to_char_index(s: &str, byte_index: usize) -> usize {
    let byte_index = floor_char_boundary(s, byte_index);
    s[..byte_index].chars().count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_ascii() {
        assert_eq!(floor_char_boundary("hello", 3), 3);
        assert_eq!(floor_char_boundary("hello", 10), 5);
    }

    #[test]
    fn test_floor_norwegian() {
        let s = "på"; // 'å' occupies bytes 1..3
        assert_eq!(floor_char_boundary(s, 2), 1);
    }

    #[test]
    fn test_floor_emoji() {
        let s = "a🎉b"; // emoji occupies bytes 1..5
        assert_eq!(floor_char_boundary(s, 3), 1);
        assert_eq!(floor_char_boundary(s, 5), 5);
    }

    #[test]
    fn test_byte_to_char_index() {
        let s = "Hei på deg";
        assert_eq!(byte_index_to_char_index(s, 0), 0);
        assert_eq!(byte_index_to_char_index(s, 4), 4);
        assert_eq!(byte_index_to_char_index(s, 7), 6);
        assert_eq!(byte_index_to_char_index(s, s.len()), 10);
    }

    #[test]
    fn test_byte_to_char_index_mid_character() {
        let s = "中文";
        assert_eq!(byte_index_to_char_index(s, 4), 1);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(floor_char_boundary("", 0), 0);
        assert_eq!(byte_index_to_char_index("", 0), 0);
    }
}
