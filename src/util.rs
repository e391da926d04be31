//! Text measuring and small text helpers.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// EM SPACE, the tab replacement used by [`tabs_to_em_spaces`].
pub const EM_SPACE: char = '\u{2003}';

/// Number of Unicode scalar values in `s`.
pub fn codepoint_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of user-perceived characters (extended grapheme clusters) in `s`.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Replaces every tab with an EM SPACE.
///
/// Social feeds drop tab characters on paste; an em space keeps the indent.
///
/// ```rust
/// use unistyle::util::tabs_to_em_spaces;
///
/// assert_eq!(tabs_to_em_spaces("\t- item"), "\u{2003}- item");
/// ```
pub fn tabs_to_em_spaces(s: &str) -> String {
    s.replace('\t', &EM_SPACE.to_string())
}

/// Pads `s` with spaces on the right up to `width` display columns.
///
/// Strings already at or past `width` are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

/// Shortens `s` to at most `max_width` display columns, ending in `…` when
/// anything was cut.
///
/// Cuts fall between grapheme clusters, so a decorated letter keeps its
/// combining mark and a fullwidth glyph is never half-counted.
///
/// ```rust
/// use unistyle::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Ｈｅｌｌｏ", 6), "Ｈｅ…");
/// assert_eq!(truncate_to_width("o\u{332}k\u{332}!\u{332}", 2), "o\u{332}…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out: String = s
        .graphemes(true)
        .take_while(|g| {
            used += g.width();
            used <= budget
        })
        .collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(codepoint_len("𝗛𝗶"), 2);
        assert_eq!(codepoint_len("e\u{301}"), 2);
        assert_eq!(grapheme_len("e\u{301}"), 1);
        assert_eq!(grapheme_len("H\u{332}i\u{332}"), 2);
    }

    #[test]
    fn test_tabs_to_em_spaces() {
        assert_eq!(tabs_to_em_spaces("a\tb\t"), "a\u{2003}b\u{2003}");
        assert_eq!(tabs_to_em_spaces("none"), "none");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("Ｈ", 3), "Ｈ ");
        assert_eq!(pad_to_width("long", 2), "long");
    }

    #[test]
    fn test_truncate_styled_text_that_fits() {
        assert_eq!(truncate_to_width("𝗛𝗲𝗹𝗹𝗼", 5), "𝗛𝗲𝗹𝗹𝗼");
        assert_eq!(truncate_to_width("H\u{332}i\u{332}", 2), "H\u{332}i\u{332}");
    }

    #[test]
    fn test_truncate_keeps_marks_on_their_letters() {
        let underlined = "H\u{332}e\u{332}l\u{332}l\u{332}o\u{332}";
        let cut = truncate_to_width(underlined, 4);
        assert_eq!(cut, "H\u{332}e\u{332}l\u{332}…");
        assert_eq!(grapheme_len(&cut), 4);
    }

    #[test]
    fn test_truncate_keeps_stacked_marks_together() {
        let cut = truncate_to_width("a\u{332}\u{336}b\u{332}\u{336}c", 2);
        assert_eq!(cut, "a\u{332}\u{336}…");
    }

    #[test]
    fn test_truncate_fullwidth_on_column_boundary() {
        assert_eq!(truncate_to_width("ＡＢＣ", 4), "Ａ…");
        assert_eq!(truncate_to_width("ＡＢＣ", 5), "ＡＢ…");
    }

    #[test]
    fn test_truncate_to_nothing() {
        assert_eq!(truncate_to_width("Hello", 0), "…");
        assert_eq!(truncate_to_width("Hello", 1), "…");
    }
}
