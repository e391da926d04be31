//! The built-in style catalog.

use once_cell::sync::Lazy;

use super::{Catalog, Category, Style};
use crate::alphabet::TableId;
use crate::mapper::Mapper;
use crate::transform::{fullwidth, interleave, ransom_note, DecorationMark, DIAMOND};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let catalog = build();
    tracing::debug!(styles = catalog.len(), "built style catalog");
    catalog
});

fn table(id: TableId, label: &str, category: Category) -> Style {
    Style::mapped(id.name(), label, category, Mapper::new(id.table().clone()))
}

fn build() -> Catalog {
    Catalog::new()
        .add(table(TableId::BoldSans, "Bold (sans)", Category::Basic))
        .add(table(TableId::BoldSerif, "Bold (serif)", Category::Serif))
        .add(table(TableId::ItalicSans, "Italic", Category::Basic))
        .add(table(TableId::BoldItalicSans, "Bold italic", Category::Basic))
        .add(table(TableId::Script, "Script", Category::Script))
        .add(table(TableId::Monospace, "Code", Category::Basic))
        .add(table(TableId::SmallCaps, "Small caps", Category::Fancy))
        .add(table(TableId::Superscript, "Superscript", Category::Decoration))
        .add(Style::decoration("underline", "Underline", DecorationMark::Underline))
        .add(Style::decoration("strikethrough", "Strikethrough", DecorationMark::Strikethrough))
        .add(table(TableId::Sans, "Sans", Category::Basic))
        .add(table(TableId::ItalicSerif, "Italic (serif)", Category::Serif))
        .add(table(TableId::BoldItalicSerif, "Bold italic (serif)", Category::Serif))
        .add(table(TableId::BoldScript, "Bold script", Category::Script))
        .add(table(TableId::Fraktur, "Gothic", Category::Fancy))
        .add(table(TableId::BoldFraktur, "Bold gothic", Category::Fancy))
        .add(table(TableId::DoubleStruck, "Double-struck", Category::Fancy))
        .add(table(TableId::Bubble, "Bubble", Category::Fancy))
        .add(Style::new("fullwidth", "Fullwidth", Category::Fancy, fullwidth))
        .add(table(TableId::Inverted, "Upside down", Category::Fancy))
        .add(Style::new("ransom_note", "Ransom note", Category::Fancy, ransom_note))
        .add(Style::new("spaced", "Spaced", Category::Fancy, |t: &str| {
            interleave(t, ' ')
        }))
        .add(Style::new("diamond", "Diamonds", Category::Fancy, |t: &str| {
            interleave(t, DIAMOND)
        }))
        .add(Style::decoration(
            "double_underline",
            "Double underline",
            DecorationMark::DoubleUnderline,
        ))
        .add(Style::decoration("wave", "Wave", DecorationMark::Wave))
}

impl Catalog {
    /// The built-in catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }
}
