//! Transforms that are not a plain table lookup.
//!
//! - [`fullwidth`]: arithmetic shift into the Halfwidth and Fullwidth Forms block
//! - [`toggle`](decoration::toggle): add or remove a combining-mark decoration
//! - [`ransom_note`]: per-character random choice of alphabet
//! - [`interleave`]: separator between every grapheme cluster

pub mod decoration;
pub mod fullwidth;
pub mod interleave;
pub mod ransom;

pub use decoration::{add_mark, has_mark, strip_mark, toggle, DecorationMark, TOGGLE_SAMPLE_SIZE};
pub use fullwidth::{fullwidth, fullwidth_inverse, FULLWIDTH_OFFSET, IDEOGRAPHIC_SPACE};
pub use interleave::{interleave, uninterleave, DIAMOND};
pub use ransom::{ransom_note, ransom_note_from, ransom_note_with};
