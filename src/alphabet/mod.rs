//! Source alphabet, character classes and parallel glyph tables.
//!
//! Every styled alphabet is a 62-slot [`AlphabetTable`] aligned with the
//! fixed source sequence `a..z A..Z 0..9`:
//!
//! | Slots | Source |
//! |-------|--------|
//! | 0..26 | `a`..`z` |
//! | 26..52 | `A`..`Z` |
//! | 52..62 | `0`..`9` |
//!
//! A slot may be empty when a Unicode block has no glyph for that letter.
//! Empty slots pass the source character through unchanged.

pub mod tables;

pub use tables::{TableId, RANSOM_TABLES, UNSAFE_TABLES};

/// Number of slots in every table.
pub const SLOT_COUNT: usize = 62;

/// The source alphabet, in slot order.
pub const SOURCE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Marks an empty slot in the string form accepted by [`AlphabetTable::with_lower`]
/// and friends.
pub const PLACEHOLDER: char = '_';

const LOWER_BASE: usize = 0;
const UPPER_BASE: usize = 26;
const DIGIT_BASE: usize = 52;

/// Classification of a single character against the source alphabet.
///
/// Each variant carries the offset within its class, so `Lower(0)` is `a`
/// and `Digit(9)` is `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower(u8),
    Upper(u8),
    Digit(u8),
    Other,
}

impl CharClass {
    /// Classifies a character.
    pub fn of(c: char) -> Self {
        match c {
            'a'..='z' => CharClass::Lower(c as u8 - b'a'),
            'A'..='Z' => CharClass::Upper(c as u8 - b'A'),
            '0'..='9' => CharClass::Digit(c as u8 - b'0'),
            _ => CharClass::Other,
        }
    }

    /// Returns the table slot for this class, or `None` for [`CharClass::Other`].
    pub fn slot(self) -> Option<usize> {
        match self {
            CharClass::Lower(i) => Some(LOWER_BASE + i as usize),
            CharClass::Upper(i) => Some(UPPER_BASE + i as usize),
            CharClass::Digit(i) => Some(DIGIT_BASE + i as usize),
            CharClass::Other => None,
        }
    }
}

/// Returns the source character stored at `slot`.
///
/// # Panics
///
/// Panics if `slot >= SLOT_COUNT`.
pub fn source_char(slot: usize) -> char {
    SOURCE.as_bytes()[slot] as char
}

/// A 62-slot glyph table aligned with [`SOURCE`].
///
/// Tables are usually built from contiguous Unicode blocks and then patched
/// where the block has holes:
///
/// ```rust
/// use unistyle::alphabet::AlphabetTable;
///
/// // Mathematical italic, whose `h` lives in the Letterlike Symbols block.
/// let italic = AlphabetTable::from_blocks(0x1D44E, 0x1D434, None).with('h', '\u{210E}');
///
/// assert_eq!(italic.get('a'), Some('𝑎'));
/// assert_eq!(italic.get('h'), Some('ℎ'));
/// assert_eq!(italic.get('7'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTable {
    slots: [Option<char>; SLOT_COUNT],
}

impl AlphabetTable {
    /// Creates a table with every slot empty.
    pub fn empty() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    /// Creates a table from the first code point of the lowercase, uppercase
    /// and (optionally) digit runs of a Unicode block.
    pub fn from_blocks(lower: u32, upper: u32, digits: Option<u32>) -> Self {
        let mut table = Self::empty();
        table.fill_run(LOWER_BASE, 26, lower);
        table.fill_run(UPPER_BASE, 26, upper);
        if let Some(start) = digits {
            table.fill_run(DIGIT_BASE, 10, start);
        }
        table
    }

    fn fill_run(&mut self, base: usize, len: usize, start: u32) {
        for i in 0..len {
            self.slots[base + i] = char::from_u32(start + i as u32);
        }
    }

    fn fill_str(mut self, base: usize, len: usize, glyphs: &str) -> Self {
        debug_assert_eq!(glyphs.chars().count(), len, "glyph run has wrong length");
        for (i, glyph) in glyphs.chars().take(len).enumerate() {
            self.slots[base + i] = (glyph != PLACEHOLDER).then_some(glyph);
        }
        self
    }

    /// Fills the `a..z` slots from a 26-character string. [`PLACEHOLDER`] leaves a slot empty.
    pub fn with_lower(self, glyphs: &str) -> Self {
        self.fill_str(LOWER_BASE, 26, glyphs)
    }

    /// Fills the `A..Z` slots from a 26-character string.
    pub fn with_upper(self, glyphs: &str) -> Self {
        self.fill_str(UPPER_BASE, 26, glyphs)
    }

    /// Fills the `0..9` slots from a 10-character string.
    pub fn with_digits(self, glyphs: &str) -> Self {
        self.fill_str(DIGIT_BASE, 10, glyphs)
    }

    /// Overrides the glyph for one source character.
    ///
    /// Characters outside the source alphabet are ignored.
    pub fn with(mut self, source: char, glyph: char) -> Self {
        if let Some(slot) = CharClass::of(source).slot() {
            self.slots[slot] = Some(glyph);
        }
        self
    }

    /// Empties the slot for one source character.
    pub fn without(mut self, source: char) -> Self {
        if let Some(slot) = CharClass::of(source).slot() {
            self.slots[slot] = None;
        }
        self
    }

    /// Returns the glyph for a source character, or `None` if the character is
    /// outside the source alphabet or its slot is empty.
    pub fn get(&self, source: char) -> Option<char> {
        CharClass::of(source).slot().and_then(|slot| self.slots[slot])
    }

    /// Returns the glyph stored at a slot index.
    pub fn slot(&self, slot: usize) -> Option<char> {
        self.slots.get(slot).copied().flatten()
    }

    /// Iterates over `(source, glyph)` pairs for every filled slot.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, glyph)| glyph.map(|g| (source_char(slot), g)))
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for AlphabetTable {
    fn default() -> Self {
        Self::empty()
    }
}
