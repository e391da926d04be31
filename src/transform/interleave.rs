//! Separator interleaving (`h e l l o`, `h◆e◆l◆l◆o`).
//!
//! The separator goes between grapheme clusters rather than code points, so
//! an accented letter written as base + combining mark is never split.

use unicode_segmentation::UnicodeSegmentation;

/// Separator of the `diamond` style.
pub const DIAMOND: char = '\u{25C6}';

/// Inserts `separator` between every pair of adjacent grapheme clusters.
///
/// ```rust
/// use unistyle::transform::interleave;
///
/// assert_eq!(interleave("abc", ' '), "a b c");
/// assert_eq!(interleave("e\u{301}t", '·'), "e\u{301}·t");
/// ```
pub fn interleave(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, g) in text.graphemes(true).enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(g);
    }
    out
}

/// Positional inverse of [`interleave`]: keeps every other cluster.
///
/// Because the separator is recognised by position, original text that
/// itself contains the separator comes back intact. Returns `None` if the
/// input does not alternate content and separator.
pub fn uninterleave(text: &str, separator: char) -> Option<String> {
    let mut buf = [0u8; 4];
    let separator: &str = separator.encode_utf8(&mut buf);
    let mut out = String::with_capacity(text.len() / 2);
    let mut clusters = 0usize;
    for (i, g) in text.graphemes(true).enumerate() {
        clusters += 1;
        if i % 2 == 0 {
            out.push_str(g);
        } else if g != separator {
            return None;
        }
    }
    // A trailing separator means the text did not come from `interleave`.
    if clusters % 2 == 0 && clusters > 0 {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleave_space() {
        assert_eq!(interleave("hi there", ' '), "h i   t h e r e");
    }

    #[test]
    fn test_interleave_diamond() {
        assert_eq!(interleave("abc", DIAMOND), "a◆b◆c");
    }

    #[test]
    fn test_interleave_trivial() {
        assert_eq!(interleave("", ' '), "");
        assert_eq!(interleave("a", ' '), "a");
    }

    #[test]
    fn test_uninterleave_recovers_separator_in_content() {
        let original = "hi there";
        let spaced = interleave(original, ' ');
        assert_eq!(uninterleave(&spaced, ' ').as_deref(), Some(original));
    }

    #[test]
    fn test_uninterleave_rejects_plain_text() {
        assert_eq!(uninterleave("abc", ' '), None);
        assert_eq!(uninterleave("a b ", ' '), None);
    }

    #[test]
    fn test_uninterleave_trivial() {
        assert_eq!(uninterleave("", ' ').as_deref(), Some(""));
        assert_eq!(uninterleave("x", ' ').as_deref(), Some("x"));
    }

    #[test]
    fn test_cluster_count() {
        let text = "👍🏽ok";
        let out = interleave(text, DIAMOND);
        assert_eq!(out.graphemes(true).count(), 5);
    }
}
