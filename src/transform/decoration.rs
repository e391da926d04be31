//! Combining-mark decorations (underline, strikethrough, ...).
//!
//! Decorations are toggles: applying one to undecorated text appends the
//! mark to every grapheme cluster, applying it again removes it. Whether the
//! text is "already decorated" is read from the text itself by sampling its
//! first clusters that can carry a mark (not whitespace, not control). Text where only some clusters carry the
//! mark is ambiguous; the sample decides, so such text may toggle either way.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::style::StyleError;

/// How many markable clusters are inspected to decide add vs remove.
pub const TOGGLE_SAMPLE_SIZE: usize = 8;

/// A zero-width combining mark used as a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationMark {
    /// U+0332 COMBINING LOW LINE
    Underline,
    /// U+0333 COMBINING DOUBLE LOW LINE
    DoubleUnderline,
    /// U+0336 COMBINING LONG STROKE OVERLAY
    Strikethrough,
    /// U+0330 COMBINING TILDE BELOW
    Wave,
}

impl DecorationMark {
    /// Every mark, in the order they are stripped by the cleaner.
    pub const ALL: [DecorationMark; 4] = [
        DecorationMark::Underline,
        DecorationMark::DoubleUnderline,
        DecorationMark::Strikethrough,
        DecorationMark::Wave,
    ];

    /// The combining character.
    pub fn as_char(self) -> char {
        match self {
            DecorationMark::Underline => '\u{0332}',
            DecorationMark::DoubleUnderline => '\u{0333}',
            DecorationMark::Strikethrough => '\u{0336}',
            DecorationMark::Wave => '\u{0330}',
        }
    }

    /// Snake-case name, also the id of the matching style.
    pub fn as_str(self) -> &'static str {
        match self {
            DecorationMark::Underline => "underline",
            DecorationMark::DoubleUnderline => "double_underline",
            DecorationMark::Strikethrough => "strikethrough",
            DecorationMark::Wave => "wave",
        }
    }

    /// Looks up the mark for a combining character.
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_char() == c)
    }
}

impl std::fmt::Display for DecorationMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DecorationMark {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| StyleError::UnknownMark {
                name: s.to_string(),
            })
    }
}

/// Removes every occurrence of `mark`.
pub fn strip_mark(text: &str, mark: DecorationMark) -> String {
    let mark = mark.as_char();
    text.chars().filter(|&c| c != mark).collect()
}

/// Returns `true` if the sampled clusters of `text` already carry `mark`.
pub fn has_mark(text: &str, mark: DecorationMark) -> bool {
    let mark = mark.as_char();
    content_clusters(text)
        .take(TOGGLE_SAMPLE_SIZE)
        .any(|g| g.contains(mark))
}

/// Clusters that [`add_mark`] decorates, minus whitespace.
fn content_clusters(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true).filter(|g| {
        !is_control_cluster(g) && g.chars().next().is_some_and(|c| !c.is_whitespace())
    })
}

fn is_control_cluster(g: &str) -> bool {
    g.chars().all(char::is_control)
}

/// Appends `mark` to every cluster, spaces included, line breaks and other
/// control characters excluded. Stray marks are stripped first.
///
/// Text with nothing but whitespace and control characters is returned with
/// stray marks stripped and nothing added.
pub fn add_mark(text: &str, mark: DecorationMark) -> String {
    let clean = strip_mark(text, mark);
    if content_clusters(&clean).next().is_none() {
        return clean;
    }
    let c = mark.as_char();
    let mut out = String::with_capacity(clean.len() * 2);
    for g in clean.graphemes(true) {
        out.push_str(g);
        if !is_control_cluster(g) {
            out.push(c);
        }
    }
    out
}

/// Adds `mark` if the text does not carry it yet, removes it otherwise.
///
/// ```rust
/// use unistyle::{toggle_decoration, DecorationMark};
///
/// let on = toggle_decoration(DecorationMark::Underline, "Hi");
/// assert_eq!(on, "H\u{332}i\u{332}");
/// assert_eq!(toggle_decoration(DecorationMark::Underline, &on), "Hi");
/// ```
pub fn toggle(text: &str, mark: DecorationMark) -> String {
    if has_mark(text, mark) {
        tracing::trace!(mark = %mark, "removing decoration");
        strip_mark(text, mark)
    } else {
        tracing::trace!(mark = %mark, "adding decoration");
        add_mark(text, mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const U: DecorationMark = DecorationMark::Underline;

    #[test]
    fn test_toggle_adds_then_removes() {
        let on = toggle("Hi", U);
        assert_eq!(on, "H\u{332}i\u{332}");
        assert_eq!(toggle(&on, U), "Hi");
    }

    #[test]
    fn test_spaces_are_decorated() {
        assert_eq!(toggle("a b", U), "a\u{332} \u{332}b\u{332}");
    }

    #[test]
    fn test_line_breaks_are_skipped() {
        let on = toggle("a\nb\r\nc", DecorationMark::Strikethrough);
        assert_eq!(on, "a\u{336}\nb\u{336}\r\nc\u{336}");
        assert_eq!(toggle(&on, DecorationMark::Strikethrough), "a\nb\r\nc");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(toggle("", U), "");
        assert_eq!(toggle("   ", U), "   ");
        assert_eq!(toggle(" \t\n", U), " \t\n");
    }

    #[test]
    fn test_leading_control_characters_are_not_sampled() {
        let text = format!("{}ab", "\x1b".repeat(TOGGLE_SAMPLE_SIZE));
        let on = toggle(&text, U);
        assert!(on.ends_with("\x1ba\u{332}b\u{332}"));
        assert_eq!(toggle(&on, U), text);
    }

    #[test]
    fn test_control_only_text_is_unchanged() {
        assert_eq!(toggle("\x07\x1b", U), "\x07\x1b");
    }

    #[test]
    fn test_stray_marks_are_normalized_on_add() {
        // Only the sample decides; a trailing stray mark outside it is
        // stripped before the mark is re-applied.
        let text = format!("{}z\u{332}", "a".repeat(TOGGLE_SAMPLE_SIZE));
        let on = toggle(&text, U);
        assert_eq!(on.matches('\u{332}').count(), TOGGLE_SAMPLE_SIZE + 1);
        assert!(on.ends_with("z\u{332}"));
    }

    #[test]
    fn test_marks_are_independent() {
        let under = toggle("ok", U);
        let both = toggle(&under, DecorationMark::Wave);
        assert_eq!(both, "o\u{332}\u{330}k\u{332}\u{330}");
        assert_eq!(toggle(&both, U), "o\u{330}k\u{330}");
    }

    #[test]
    fn test_combined_cluster_gets_one_mark() {
        let on = toggle("e\u{301}", U);
        assert_eq!(on, "e\u{301}\u{332}");
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!("wave".parse::<DecorationMark>(), Ok(DecorationMark::Wave));
        assert!("blink".parse::<DecorationMark>().is_err());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(DecorationMark::from_char('\u{333}'), Some(DecorationMark::DoubleUnderline));
        assert_eq!(DecorationMark::from_char('_'), None);
    }
}
