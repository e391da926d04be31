//! Reverse resolution of styled text back to plain ASCII.
//!
//! [`clean_format`] undoes any mix of the built-in styles without knowing
//! which ones produced the text. It relies on one [`ReverseMap`] inverted from
//! every reversible table, plus arithmetic handling for fullwidth forms and a
//! final pass that strips every [`DecorationMark`].
//!
//! # Known limits
//!
//! - Tables on [`UNSAFE_TABLES`](crate::alphabet::UNSAFE_TABLES) (upside-down
//!   text) are not inverted; their glyphs stay as they are.
//! - Interleave separators are left in place. Use
//!   [`uninterleave`](crate::transform::uninterleave) when the separator is
//!   known.
//! - Accents folded away by a mapper do not come back.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::alphabet::{AlphabetTable, TableId};
use crate::mapper::fold_accent;
use crate::transform::fullwidth::narrow;
use crate::transform::DecorationMark;

static BUILTIN: Lazy<ReverseMap> = Lazy::new(ReverseMap::builtin);

/// A glyph that two registrations disagree on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The styled glyph.
    pub glyph: char,
    /// Source recorded first, or the plain letter the glyph already spells
    /// (itself for ASCII, the base letter for an accented one).
    pub existing: char,
    /// Source recorded by the later table, which wins.
    pub replacement: char,
    /// Name of the later table.
    pub table: String,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "table '{}' maps '{}' (U+{:04X}) to '{}', already mapped to '{}'",
            self.table, self.glyph, self.glyph as u32, self.replacement, self.existing
        )
    }
}

/// Builder for a [`ReverseMap`].
///
/// Tables are registered in order; [`exclude`](Self::exclude) names tables
/// that must be skipped even if registered.
#[derive(Debug, Default)]
pub struct ReverseMapBuilder {
    tables: Vec<(String, AlphabetTable)>,
    excluded: Vec<String>,
}

impl ReverseMapBuilder {
    /// Registers a table under a name.
    pub fn table(mut self, name: impl Into<String>, table: &AlphabetTable) -> Self {
        self.tables.push((name.into(), table.clone()));
        self
    }

    /// Skips the named table.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.push(name.into());
        self
    }

    /// Inverts every registered, non-excluded table.
    ///
    /// Conflicts never abort the build; they are logged and recorded in
    /// [`ReverseMap::collisions`].
    pub fn build(self) -> ReverseMap {
        let mut glyphs: HashMap<char, char> = HashMap::new();
        let mut collisions = Vec::new();
        let mut registered = 0usize;

        for (name, table) in &self.tables {
            if self.excluded.contains(name) {
                tracing::debug!(table = %name, "skipping excluded table");
                continue;
            }
            registered += 1;
            for (source, glyph) in table.pairs() {
                let existing = if glyph.is_ascii() {
                    Some(glyph)
                } else {
                    fold_accent(glyph).or_else(|| glyphs.get(&glyph).copied())
                };
                if let Some(existing) = existing.filter(|&e| e != source) {
                    let collision = Collision {
                        glyph,
                        existing,
                        replacement: source,
                        table: name.clone(),
                    };
                    tracing::warn!(%collision, "reverse glyph map collision");
                    collisions.push(collision);
                }
                glyphs.insert(glyph, source);
            }
        }

        tracing::debug!(
            tables = registered,
            glyphs = glyphs.len(),
            collisions = collisions.len(),
            "built reverse glyph map"
        );
        ReverseMap { glyphs, collisions }
    }
}

/// Styled glyph → source character lookup.
#[derive(Debug, Clone)]
pub struct ReverseMap {
    glyphs: HashMap<char, char>,
    collisions: Vec<Collision>,
}

impl ReverseMap {
    pub fn builder() -> ReverseMapBuilder {
        ReverseMapBuilder::default()
    }

    /// Builds the map from every built-in table, minus the unsafe ones.
    pub fn builtin() -> Self {
        let builder = TableId::ALL
            .iter()
            .fold(Self::builder(), |b, id| b.table(id.name(), id.table()));
        TableId::ALL
            .iter()
            .filter(|id| !id.is_reversible())
            .fold(builder, |b, id| b.exclude(id.name()))
            .build()
    }

    /// The shared built-in map.
    pub fn global() -> &'static ReverseMap {
        &BUILTIN
    }

    /// Source character for a styled glyph.
    pub fn get(&self, glyph: char) -> Option<char> {
        self.glyphs.get(&glyph).copied()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Conflicts found while building. Empty for a consistent table set.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Resolves one character: fullwidth, ideographic space, then table glyphs.
    pub fn resolve_char(&self, c: char) -> char {
        narrow(c).or_else(|| self.get(c)).unwrap_or(c)
    }

    /// Cleans `text` with this map. See [`clean_format`].
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned: String = text.chars().map(|c| self.resolve_char(c)).collect();
        for mark in DecorationMark::ALL {
            let m = mark.as_char();
            if cleaned.contains(m) {
                cleaned = cleaned.chars().filter(|&c| c != m).collect();
            }
        }
        cleaned
    }
}

/// Strips every known style and decoration from `text`.
///
/// Characters that are not styled glyphs pass through unchanged.
///
/// ```rust
/// use unistyle::clean_format;
///
/// assert_eq!(clean_format("𝗕𝗹𝘂𝗲"), "Blue");
/// assert_eq!(clean_format("Ｈｉ\u{3000}ⓣⓗⓔⓡⓔ"), "Hi there");
/// assert_eq!(clean_format("o\u{332}k\u{336}"), "ok");
/// ```
pub fn clean_format(text: &str) -> String {
    ReverseMap::global().clean(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::UNSAFE_TABLES;
    use crate::mapper::Mapper;

    #[test]
    fn test_builtin_has_no_collisions() {
        let map = ReverseMap::builtin();
        assert!(
            map.collisions().is_empty(),
            "collisions: {:?}",
            map.collisions()
        );
    }

    #[test]
    fn test_unsafe_tables_are_not_registered() {
        let map = ReverseMap::global();
        for id in UNSAFE_TABLES {
            for (_, glyph) in id.table().pairs() {
                assert_eq!(map.get(glyph), None, "{} glyph '{}' registered", id, glyph);
            }
        }
        assert_eq!(clean_format("quiz"), "quiz");
    }

    #[test]
    fn test_size_matches_reversible_tables() {
        let expected: usize = TableId::ALL
            .iter()
            .filter(|id| id.is_reversible())
            .map(|id| id.table().filled())
            .sum();
        assert_eq!(ReverseMap::global().len(), expected);
    }

    #[test]
    fn test_clean_mixed_styles() {
        let text = format!(
            "{} {} {}",
            Mapper::new(TableId::Script.table().clone()).apply("Hello"),
            Mapper::new(TableId::Fraktur.table().clone()).apply("Rust"),
            Mapper::new(TableId::DoubleStruck.table().clone()).apply("2024"),
        );
        assert_eq!(clean_format(&text), "Hello Rust 2024");
    }

    #[test]
    fn test_clean_fullwidth_and_marks() {
        assert_eq!(clean_format("ｆｕｌｌ\u{3000}ｗｉｄｔｈ！"), "full width!");
        assert_eq!(clean_format("a\u{332}\u{333}\u{336}\u{330}"), "a");
    }

    #[test]
    fn test_clean_leaves_unknown_alone() {
        assert_eq!(clean_format("Déjà vu ✓ 😀"), "Déjà vu ✓ 😀");
        assert_eq!(clean_format(""), "");
    }

    #[test]
    fn test_ascii_glyph_is_reported() {
        let table = AlphabetTable::empty().with('a', 'b');
        let map = ReverseMap::builder().table("bad", &table).build();
        assert_eq!(map.collisions().len(), 1);
        assert_eq!(map.collisions()[0].table, "bad");
    }

    #[test]
    fn test_accented_glyph_is_reported() {
        let table = AlphabetTable::empty().with('q', '\u{1EB}');
        let map = ReverseMap::builder().table("ogonek", &table).build();
        assert_eq!(map.collisions().len(), 1);
        assert_eq!(map.collisions()[0].existing, 'o');
    }

    #[test]
    fn test_accented_letters_are_not_rewritten() {
        assert_eq!(clean_format("\u{1EB}"), "\u{1EB}");
        assert_eq!(clean_format("ʀᴇᴅ \u{1EB}"), "red \u{1EB}");
        assert_eq!(clean_format("ʀᴇᴅ \u{A7AF}"), "red q");
    }

    #[test]
    fn test_conflict_is_reported_and_later_wins() {
        let first = AlphabetTable::empty().with('a', 'α');
        let second = AlphabetTable::empty().with('b', 'α');
        let map = ReverseMap::builder()
            .table("first", &first)
            .table("second", &second)
            .build();
        assert_eq!(map.get('α'), Some('b'));
        assert_eq!(
            map.collisions(),
            &[Collision {
                glyph: 'α',
                existing: 'a',
                replacement: 'b',
                table: "second".to_string(),
            }]
        );
        assert!(map.collisions()[0].to_string().contains("second"));
    }

    #[test]
    fn test_same_mapping_twice_is_not_a_collision() {
        let table = AlphabetTable::empty().with('a', 'α');
        let map = ReverseMap::builder()
            .table("one", &table)
            .table("two", &table)
            .build();
        assert!(map.collisions().is_empty());
    }

    #[test]
    fn test_excluded_table_is_skipped() {
        let table = AlphabetTable::empty().with('a', 'α');
        let map = ReverseMap::builder()
            .table("greek", &table)
            .exclude("greek")
            .build();
        assert!(map.is_empty());
    }
}
