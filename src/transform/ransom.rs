//! Ransom-note styling: a different alphabet for every character.
//!
//! The output is random by construction. The RNG is a parameter so callers
//! (and tests) can supply a seeded generator; [`ransom_note`] uses the
//! thread-local one.

use rand::Rng;

use crate::alphabet::{TableId, RANSOM_TABLES};
use crate::mapper::map_char;

/// Styles each non-whitespace character through a table picked uniformly
/// from `tables`. Whitespace is left alone.
///
/// An empty `tables` slice returns the text unchanged.
pub fn ransom_note_from<R: Rng + ?Sized>(text: &str, tables: &[TableId], rng: &mut R) -> String {
    if tables.is_empty() {
        return text.to_string();
    }
    text.chars()
        .map(|c| {
            if c.is_whitespace() {
                c
            } else {
                let table = tables[rng.random_range(0..tables.len())].table();
                map_char(table, true, c)
            }
        })
        .collect()
}

/// [`ransom_note_from`] over the built-in [`RANSOM_TABLES`].
pub fn ransom_note_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    ransom_note_from(text, RANSOM_TABLES, rng)
}

/// Ransom note using the thread-local RNG. Two calls on the same input
/// usually differ.
pub fn ransom_note(text: &str) -> String {
    ransom_note_with(text, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_output() {
        let a = ransom_note_with("Ransom note 2024", &mut SmallRng::seed_from_u64(7));
        let b = ransom_note_with("Ransom note 2024", &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_untouched() {
        let out = ransom_note_with("a b\tc\nd", &mut SmallRng::seed_from_u64(1));
        let spaces: Vec<char> = out.chars().filter(|c| c.is_whitespace()).collect();
        assert_eq!(spaces, vec![' ', '\t', '\n']);
    }

    #[test]
    fn test_char_count_preserved() {
        let text = "Mixed: café, 42 & 😀";
        let out = ransom_note_with(text, &mut SmallRng::seed_from_u64(3));
        assert_eq!(out.chars().count(), text.chars().count());
    }

    #[test]
    fn test_every_glyph_comes_from_a_ransom_table() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let out = ransom_note_with(text, &mut SmallRng::seed_from_u64(11));
        for (source, styled) in text.chars().zip(out.chars()) {
            let known = styled == source
                || RANSOM_TABLES
                    .iter()
                    .any(|id| id.table().get(source) == Some(styled));
            assert!(known, "'{}' -> '{}' not from a ransom table", source, styled);
        }
    }

    #[test]
    fn test_uses_more_than_one_table() {
        let text = "a".repeat(64);
        let out = ransom_note_with(&text, &mut SmallRng::seed_from_u64(5));
        let distinct: std::collections::HashSet<char> = out.chars().collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_single_table() {
        let out = ransom_note_from(
            "ab",
            &[TableId::BoldSans],
            &mut SmallRng::seed_from_u64(0),
        );
        assert_eq!(out, "𝗮𝗯");
    }

    #[test]
    fn test_no_tables() {
        let out = ransom_note_from("ab", &[], &mut SmallRng::seed_from_u64(0));
        assert_eq!(out, "ab");
    }
}
