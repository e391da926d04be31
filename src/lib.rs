//! # Unistyle - Reversible Unicode text styling
//!
//! Unistyle turns plain text into look-alike "fonts" built from Unicode code
//! points (𝗯𝗼𝗹𝗱, 𝓈𝒸𝓇𝒾𝓅𝓉, 𝚖𝚘𝚗𝚘, ⓑⓤⓑⓑⓛⓔ, ｆｕｌｌｗｉｄｔｈ, u̲n̲d̲e̲r̲l̲i̲n̲e̲) and
//! turns such text back into plain ASCII.
//!
//! ## Quick Start
//!
//! ```rust
//! use unistyle::{apply_style, clean_format, list_styles, Category};
//!
//! let bold = apply_style("bold_sans", "Hello 123").unwrap();
//! assert_eq!(bold, "𝗛𝗲𝗹𝗹𝗼 𝟭𝟮𝟯");
//! assert_eq!(clean_format(&bold), "Hello 123");
//!
//! let scripts: Vec<_> = list_styles(Some(Category::Script))
//!     .into_iter()
//!     .map(|s| s.id)
//!     .collect();
//! assert_eq!(scripts, ["script", "bold_script"]);
//! ```
//!
//! ## Pieces
//!
//! - [`alphabet`]: the source alphabet and the 62-slot glyph tables
//! - [`mapper`]: table-driven transforms with accent folding
//! - [`transform`]: fullwidth, decoration toggles, ransom note, interleave
//! - [`style`]: the ordered [`Catalog`] of named styles
//! - [`clean`]: the reverse map behind [`clean_format`]
//!
//! All transforms are pure functions over `&str` and are safe to call from
//! any thread. The built-in catalog and reverse map are built once, on first
//! use. The only non-deterministic style is `ransom_note`; use
//! [`transform::ransom_note_with`] to supply a seeded RNG.
//!
//! ## Round trips
//!
//! For every table style except `inverted`,
//! `clean_format(style(text)) == mapper::normalize_accents(text)`. Fullwidth
//! and decoration styles round-trip exactly. Interleaved text keeps its
//! separators; see [`transform::uninterleave`].

pub mod alphabet;
pub mod clean;
pub mod mapper;
pub mod style;
pub mod transform;
pub mod util;

pub use clean::{clean_format, Collision, ReverseMap};
pub use mapper::{normalize_accents, Mapper};
pub use style::{Catalog, Category, Style, StyleError, StyleInfo};
pub use transform::DecorationMark;

/// Lists the built-in styles in catalog order, optionally for one category.
pub fn list_styles(category: Option<Category>) -> Vec<StyleInfo> {
    Catalog::builtin().infos(category)
}

/// Applies the built-in style `id` to `text`.
///
/// # Errors
///
/// Returns [`StyleError::NotFound`] if no style has this id.
pub fn apply_style(id: &str, text: &str) -> Result<String, StyleError> {
    Catalog::builtin().apply(id, text)
}

/// Cleans `text` first unless `id` is a decoration, then applies the style.
///
/// Use this when the input may already be styled.
pub fn restyle(id: &str, text: &str) -> Result<String, StyleError> {
    Catalog::builtin().restyle(id, text)
}

/// Adds `mark` to every character of `text`, or removes it if present.
pub fn toggle_decoration(mark: DecorationMark, text: &str) -> String {
    transform::toggle(text, mark)
}
