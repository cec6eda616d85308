//! Stylistic glyph substitution: superscripts, enclosed letters, math
//! alphabets, runes, flags and unit squares.
//!
//! Each style is one table from the catalog. Characters a style has no glyph
//! for are left as they are.

use crate::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Small,
    Subscript,
    SmallCaps,
    Superscript,
    Rune,
    DoubleStruck,
    Script,
    BoldScript,
    Fraktur,
    Flag,
    Square,
    Squared,
    SquareBlack,
    Circled,
    CircledBlack,
    /// Composite of the decorative tables listed in [`tables::ASCII_ORDER`].
    AsciiDecorative,
}

impl Style {
    /// All styles in declaration order; the composite comes last.
    pub const ALL: [Style; 16] = [
        Style::Small,
        Style::Subscript,
        Style::SmallCaps,
        Style::Superscript,
        Style::Rune,
        Style::DoubleStruck,
        Style::Script,
        Style::BoldScript,
        Style::Fraktur,
        Style::Flag,
        Style::Square,
        Style::Squared,
        Style::SquareBlack,
        Style::Circled,
        Style::CircledBlack,
        Style::AsciiDecorative,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Small => "small",
            Style::Subscript => "subscript",
            Style::SmallCaps => "small_caps",
            Style::Superscript => "superscript",
            Style::Rune => "rune",
            Style::DoubleStruck => "double_struck",
            Style::Script => "script",
            Style::BoldScript => "bold_script",
            Style::Fraktur => "fraktur",
            Style::Flag => "flag",
            Style::Square => "square",
            Style::Squared => "squared",
            Style::SquareBlack => "square_black",
            Style::Circled => "circled",
            Style::CircledBlack => "circled_black",
            Style::AsciiDecorative => "ascii",
        }
    }

    pub fn apply(self, text: &str) -> String {
        tables::global().style(self).replacer.replace(text)
    }
}

/// Small kana: あ → ぁ, ク → ㇰ.
pub fn to_small(text: &str) -> String {
    Style::Small.apply(text)
}

pub fn to_sub(text: &str) -> String {
    Style::Subscript.apply(text)
}

pub fn to_small_caps(text: &str) -> String {
    Style::SmallCaps.apply(text)
}

pub fn to_superscript(text: &str) -> String {
    Style::Superscript.apply(text)
}

/// Runic transliteration. Digraphs such as "th" and "ng" map to single runes.
pub fn to_rune(text: &str) -> String {
    Style::Rune.apply(text)
}

pub fn to_double_struck(text: &str) -> String {
    Style::DoubleStruck.apply(text)
}

pub fn to_script(text: &str) -> String {
    Style::Script.apply(text)
}

pub fn to_bold_script(text: &str) -> String {
    Style::BoldScript.apply(text)
}

pub fn to_fraktur(text: &str) -> String {
    Style::Fraktur.apply(text)
}

/// Japanese country and region names to flag emoji: 日本 → 🇯🇵.
pub fn to_flag(text: &str) -> String {
    Style::Flag.apply(text)
}

/// Unit and era names to CJK compatibility squares: キロ → ㌔, km2 → ㎢.
pub fn to_square(text: &str) -> String {
    Style::Square.apply(text)
}

pub fn to_squared(text: &str) -> String {
    Style::Squared.apply(text)
}

pub fn to_square_black(text: &str) -> String {
    Style::SquareBlack.apply(text)
}

pub fn to_circled(text: &str) -> String {
    Style::Circled.apply(text)
}

pub fn to_circled_black(text: &str) -> String {
    Style::CircledBlack.apply(text)
}

pub fn to_ascii_decorative(text: &str) -> String {
    Style::AsciiDecorative.apply(text)
}
