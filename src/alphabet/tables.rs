//! Built-in glyph tables.
//!
//! Most tables come straight from the Mathematical Alphanumeric Symbols block
//! (U+1D400..U+1D7FF). That block leaves holes where a glyph already existed
//! in Letterlike Symbols (U+2100..U+214F); those slots are patched with the
//! older code points so every letter renders.

use once_cell::sync::Lazy;

use super::AlphabetTable;

/// Identifies a built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    BoldSerif,
    ItalicSerif,
    BoldItalicSerif,
    Script,
    BoldScript,
    Fraktur,
    BoldFraktur,
    DoubleStruck,
    Sans,
    BoldSans,
    ItalicSans,
    BoldItalicSans,
    Monospace,
    Bubble,
    SmallCaps,
    Superscript,
    Inverted,
}

/// Tables that must never be registered in the reverse map.
///
/// The inverted table reuses plain Latin letters (`q`, `p`, `d`, `b`, `l`,
/// `o`, `s`, `u`, `x`, `z` and several capitals); inverting it would rewrite
/// ordinary text.
pub const UNSAFE_TABLES: &[TableId] = &[TableId::Inverted];

/// Tables the ransom note draws from.
pub const RANSOM_TABLES: &[TableId] = &[
    TableId::BoldSerif,
    TableId::ItalicSerif,
    TableId::Script,
    TableId::Fraktur,
    TableId::DoubleStruck,
    TableId::BoldSans,
    TableId::Monospace,
    TableId::Bubble,
    TableId::SmallCaps,
];

impl TableId {
    /// Every built-in table, in registration order.
    pub const ALL: &'static [TableId] = &[
        TableId::BoldSerif,
        TableId::ItalicSerif,
        TableId::BoldItalicSerif,
        TableId::Script,
        TableId::BoldScript,
        TableId::Fraktur,
        TableId::BoldFraktur,
        TableId::DoubleStruck,
        TableId::Sans,
        TableId::BoldSans,
        TableId::ItalicSans,
        TableId::BoldItalicSans,
        TableId::Monospace,
        TableId::Bubble,
        TableId::SmallCaps,
        TableId::Superscript,
        TableId::Inverted,
    ];

    /// Snake-case name, matching the id of the style built on the table.
    pub fn name(self) -> &'static str {
        match self {
            TableId::BoldSerif => "bold_serif",
            TableId::ItalicSerif => "italic_serif",
            TableId::BoldItalicSerif => "bold_italic_serif",
            TableId::Script => "script",
            TableId::BoldScript => "bold_script",
            TableId::Fraktur => "fraktur",
            TableId::BoldFraktur => "bold_fraktur",
            TableId::DoubleStruck => "double_struck",
            TableId::Sans => "sans",
            TableId::BoldSans => "bold_sans",
            TableId::ItalicSans => "italic_sans",
            TableId::BoldItalicSans => "bold_italic_sans",
            TableId::Monospace => "monospace",
            TableId::Bubble => "bubble",
            TableId::SmallCaps => "small_caps",
            TableId::Superscript => "superscript",
            TableId::Inverted => "inverted",
        }
    }

    /// Returns the glyph table.
    pub fn table(self) -> &'static AlphabetTable {
        match self {
            TableId::BoldSerif => &BOLD_SERIF,
            TableId::ItalicSerif => &ITALIC_SERIF,
            TableId::BoldItalicSerif => &BOLD_ITALIC_SERIF,
            TableId::Script => &SCRIPT,
            TableId::BoldScript => &BOLD_SCRIPT,
            TableId::Fraktur => &FRAKTUR,
            TableId::BoldFraktur => &BOLD_FRAKTUR,
            TableId::DoubleStruck => &DOUBLE_STRUCK,
            TableId::Sans => &SANS,
            TableId::BoldSans => &BOLD_SANS,
            TableId::ItalicSans => &ITALIC_SANS,
            TableId::BoldItalicSans => &BOLD_ITALIC_SANS,
            TableId::Monospace => &MONOSPACE,
            TableId::Bubble => &BUBBLE,
            TableId::SmallCaps => &SMALL_CAPS,
            TableId::Superscript => &SUPERSCRIPT,
            TableId::Inverted => &INVERTED,
        }
    }

    /// Returns `true` if the table may be inverted by the reverse map.
    pub fn is_reversible(self) -> bool {
        !UNSAFE_TABLES.contains(&self)
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static BOLD_SERIF: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D41A, 0x1D400, Some(0x1D7CE)));

static ITALIC_SERIF: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D44E, 0x1D434, None).with('h', '\u{210E}'));

static BOLD_ITALIC_SERIF: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D482, 0x1D468, None));

static SCRIPT: Lazy<AlphabetTable> = Lazy::new(|| {
    AlphabetTable::from_blocks(0x1D4B6, 0x1D49C, None)
        .with('B', '\u{212C}')
        .with('E', '\u{2130}')
        .with('F', '\u{2131}')
        .with('H', '\u{210B}')
        .with('I', '\u{2110}')
        .with('L', '\u{2112}')
        .with('M', '\u{2133}')
        .with('R', '\u{211B}')
        .with('e', '\u{212F}')
        .with('g', '\u{210A}')
        .with('o', '\u{2134}')
});

static BOLD_SCRIPT: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D4EA, 0x1D4D0, None));

static FRAKTUR: Lazy<AlphabetTable> = Lazy::new(|| {
    AlphabetTable::from_blocks(0x1D51E, 0x1D504, None)
        .with('C', '\u{212D}')
        .with('H', '\u{210C}')
        .with('I', '\u{2111}')
        .with('R', '\u{211C}')
        .with('Z', '\u{2128}')
});

static BOLD_FRAKTUR: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D586, 0x1D56C, None));

static DOUBLE_STRUCK: Lazy<AlphabetTable> = Lazy::new(|| {
    AlphabetTable::from_blocks(0x1D552, 0x1D538, Some(0x1D7D8))
        .with('C', '\u{2102}')
        .with('H', '\u{210D}')
        .with('N', '\u{2115}')
        .with('P', '\u{2119}')
        .with('Q', '\u{211A}')
        .with('R', '\u{211D}')
        .with('Z', '\u{2124}')
});

static SANS: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D5BA, 0x1D5A0, Some(0x1D7E2)));

static BOLD_SANS: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D5EE, 0x1D5D4, Some(0x1D7EC)));

static ITALIC_SANS: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D622, 0x1D608, None));

static BOLD_ITALIC_SANS: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D656, 0x1D63C, None));

static MONOSPACE: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::from_blocks(0x1D68A, 0x1D670, Some(0x1D7F6)));

static BUBBLE: Lazy<AlphabetTable> = Lazy::new(|| {
    AlphabetTable::from_blocks(0x24D0, 0x24B6, None).with_digits("⓪①②③④⑤⑥⑦⑧⑨")
});

// Capitals stay capitals; `x` has no small-capital form.
static SMALL_CAPS: Lazy<AlphabetTable> =
    Lazy::new(|| AlphabetTable::empty().with_lower("ᴀʙᴄᴅᴇꜰɢʜɪᴊᴋʟᴍɴᴏᴘꞯʀꜱᴛᴜᴠᴡ_ʏᴢ"));

// No modifier capitals exist for C F Q S X Y Z.
static SUPERSCRIPT: Lazy<AlphabetTable> = Lazy::new(|| {
    AlphabetTable::empty()
        .with_lower("ᵃᵇᶜᵈᵉᶠᵍʰⁱʲᵏˡᵐⁿᵒᵖᵠʳˢᵗᵘᵛʷˣʸᶻ")
        .with_upper("ᴬᴮ_ᴰᴱ_ᴳᴴᴵᴶᴷᴸᴹᴺᴼᴾ_ᴿ_ᵀᵁⱽᵂ___")
        .with_digits("⁰¹²³⁴⁵⁶⁷⁸⁹")
});

static INVERTED: Lazy<AlphabetTable> = Lazy::new(|| {
    AlphabetTable::empty()
        .with_lower("ɐqɔpǝɟƃɥᴉɾʞlɯuodbɹsʇnʌʍxʎz")
        .with_upper("∀ᗺƆᗡƎℲ⅁HIſꓘ˥WNOԀ_ᴚS⊥∩ΛMX⅄Z")
});
