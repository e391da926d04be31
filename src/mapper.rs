//! Table-driven forward transforms.
//!
//! A [`Mapper`] substitutes every source-alphabet character with the glyph
//! from its table and passes everything else through. With accent folding
//! enabled, precomposed Latin letters (`é`, `Ñ`, `ü`) are reduced to their
//! base letter first, since no styled block carries accented glyphs.

use unicode_normalization::UnicodeNormalization;

use crate::alphabet::{AlphabetTable, CharClass};

/// Returns `true` for marks in the Combining Diacritical Marks block.
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Folds an accented Latin letter to its base letter.
///
/// Returns `None` unless canonical decomposition leaves exactly one base
/// character inside the source alphabet.
///
/// ```rust
/// use unistyle::mapper::fold_accent;
///
/// assert_eq!(fold_accent('é'), Some('e'));
/// assert_eq!(fold_accent('Ç'), Some('C'));
/// assert_eq!(fold_accent('ß'), None);
/// assert_eq!(fold_accent('a'), None);
/// ```
pub fn fold_accent(c: char) -> Option<char> {
    if c.is_ascii() {
        return None;
    }
    let mut bases = std::iter::once(c).nfd().filter(|m| !is_diacritic(*m));
    let base = bases.next()?;
    if bases.next().is_some() || base == c {
        return None;
    }
    match CharClass::of(base) {
        CharClass::Other => None,
        _ => Some(base),
    }
}

/// Folds every foldable character in `text`, leaving the rest untouched.
///
/// This is the plain text a mapped style round-trips to:
/// `clean_format(style(text)) == normalize_accents(text)`.
pub fn normalize_accents(text: &str) -> String {
    text.chars().map(|c| fold_accent(c).unwrap_or(c)).collect()
}

/// Maps one character through `table`, folding accents if requested.
///
/// A folded letter whose slot is empty comes out as the bare base letter, so
/// folding always drops the accent.
pub(crate) fn map_char(table: &AlphabetTable, fold: bool, c: char) -> char {
    if let Some(glyph) = table.get(c) {
        return glyph;
    }
    if CharClass::of(c) != CharClass::Other {
        // Empty slot.
        return c;
    }
    if fold {
        if let Some(base) = fold_accent(c) {
            return table.get(base).unwrap_or(base);
        }
    }
    c
}

/// A forward transform over one glyph table.
///
/// # Example
///
/// ```rust
/// use unistyle::alphabet::TableId;
/// use unistyle::mapper::Mapper;
///
/// let bold = Mapper::new(TableId::BoldSans.table().clone());
/// assert_eq!(bold.apply("Café 42!"), "𝗖𝗮𝗳𝗲 𝟰𝟮!");
///
/// let strict = bold.clone().fold_accents(false);
/// assert_eq!(strict.apply("é"), "é");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapper {
    table: AlphabetTable,
    fold_accents: bool,
}

impl Mapper {
    /// Creates a mapper with accent folding enabled.
    pub fn new(table: AlphabetTable) -> Self {
        Self {
            table,
            fold_accents: true,
        }
    }

    /// Enables or disables accent folding, returning the updated mapper.
    pub fn fold_accents(mut self, enabled: bool) -> Self {
        self.fold_accents = enabled;
        self
    }

    /// Returns the backing table.
    pub fn table(&self) -> &AlphabetTable {
        &self.table
    }

    /// Maps a single character.
    pub fn map_char(&self, c: char) -> char {
        map_char(&self.table, self.fold_accents, c)
    }

    /// Maps every character of `text`.
    ///
    /// The result has exactly as many `char`s as the input.
    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.map_char(c)).collect()
    }

    /// Converts the mapper into a boxed transform closure.
    pub fn into_fn(self) -> impl Fn(&str) -> String + Send + Sync + 'static {
        move |text: &str| self.apply(text)
    }
}
