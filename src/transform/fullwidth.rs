//! Fullwidth forms by code-point arithmetic.
//!
//! Printable ASCII `!`..`~` has a fullwidth twin at a fixed offset in the
//! Halfwidth and Fullwidth Forms block; the space maps to the ideographic
//! space.

/// Distance between printable ASCII and its fullwidth form.
pub const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// The ideographic space, fullwidth counterpart of `' '`.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

const ASCII_FIRST: u32 = 0x21;
const ASCII_LAST: u32 = 0x7E;

/// Converts one character to its fullwidth form.
pub fn widen(c: char) -> char {
    let code = c as u32;
    if (ASCII_FIRST..=ASCII_LAST).contains(&code) {
        char::from_u32(code + FULLWIDTH_OFFSET).unwrap_or(c)
    } else if c == ' ' {
        IDEOGRAPHIC_SPACE
    } else {
        c
    }
}

/// Converts one fullwidth character back to ASCII.
///
/// Returns `None` for characters outside the fullwidth range.
pub fn narrow(c: char) -> Option<char> {
    let code = c as u32;
    if (ASCII_FIRST + FULLWIDTH_OFFSET..=ASCII_LAST + FULLWIDTH_OFFSET).contains(&code) {
        char::from_u32(code - FULLWIDTH_OFFSET)
    } else if c == IDEOGRAPHIC_SPACE {
        Some(' ')
    } else {
        None
    }
}

/// Converts `text` to fullwidth forms.
///
/// ```rust
/// use unistyle::transform::fullwidth;
///
/// assert_eq!(fullwidth("Hi 5!"), "Ｈｉ\u{3000}５！");
/// ```
pub fn fullwidth(text: &str) -> String {
    text.chars().map(widen).collect()
}

/// Reverses [`fullwidth`].
pub fn fullwidth_inverse(text: &str) -> String {
    text.chars().map(|c| narrow(c).unwrap_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_edges() {
        assert_eq!(widen('!'), '！');
        assert_eq!(widen('~'), '～');
        assert_eq!(widen(' '), IDEOGRAPHIC_SPACE);
        assert_eq!(widen('\u{7F}'), '\u{7F}');
        assert_eq!(widen('\n'), '\n');
        assert_eq!(widen('é'), 'é');
    }

    #[test]
    fn test_narrow_outside_range() {
        assert_eq!(narrow('a'), None);
        assert_eq!(narrow('\u{FF00}'), None);
        assert_eq!(narrow('\u{FF5F}'), None);
        assert_eq!(narrow('Ａ'), Some('A'));
    }

    #[test]
    fn test_inverse() {
        let text = "The quick {brown} fox #42 ~ jumps!";
        assert_eq!(fullwidth_inverse(&fullwidth(text)), text);
    }
}
