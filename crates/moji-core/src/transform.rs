//! Name-addressable catalog of every text-to-text operation.

use crate::decorate::Style;
use crate::{kana, numeric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    HiraToKata,
    KataToHira,
    SwapKana,
    Devoice,
    SemiVoice,
    FullVoice,
    Decorate(Style),
    NormalizeHex,
    NormalizeDecimal,
}

impl Transform {
    pub const ALL: [Transform; 24] = [
        Transform::HiraToKata,
        Transform::KataToHira,
        Transform::SwapKana,
        Transform::Devoice,
        Transform::SemiVoice,
        Transform::FullVoice,
        Transform::Decorate(Style::Small),
        Transform::Decorate(Style::Subscript),
        Transform::Decorate(Style::SmallCaps),
        Transform::Decorate(Style::Superscript),
        Transform::Decorate(Style::Rune),
        Transform::Decorate(Style::DoubleStruck),
        Transform::Decorate(Style::Script),
        Transform::Decorate(Style::BoldScript),
        Transform::Decorate(Style::Fraktur),
        Transform::Decorate(Style::Flag),
        Transform::Decorate(Style::Square),
        Transform::Decorate(Style::Squared),
        Transform::Decorate(Style::SquareBlack),
        Transform::Decorate(Style::Circled),
        Transform::Decorate(Style::CircledBlack),
        Transform::Decorate(Style::AsciiDecorative),
        Transform::NormalizeHex,
        Transform::NormalizeDecimal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Transform::HiraToKata => "hira_to_kata",
            Transform::KataToHira => "kata_to_hira",
            Transform::SwapKana => "swap_kana",
            Transform::Devoice => "devoice",
            Transform::SemiVoice => "semi_voice",
            Transform::FullVoice => "full_voice",
            Transform::Decorate(style) => style.name(),
            Transform::NormalizeHex => "hex",
            Transform::NormalizeDecimal => "decimal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Transform::HiraToKata => kana::hira_to_kata(text),
            Transform::KataToHira => kana::kata_to_hira(text),
            Transform::SwapKana => kana::swap_kana(text),
            Transform::Devoice => kana::devoice(text),
            Transform::SemiVoice => kana::semi_voice(text),
            Transform::FullVoice => kana::full_voice(text),
            Transform::Decorate(style) => style.apply(text),
            Transform::NormalizeHex => numeric::normalize_hex(text),
            Transform::NormalizeDecimal => numeric::normalize_decimal(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_listed() {
        for style in Style::ALL {
            assert!(Transform::ALL.contains(&Transform::Decorate(style)));
        }
    }

    #[test]
    fn names_round_trip() {
        for t in Transform::ALL {
            assert_eq!(Transform::from_name(t.name()), Some(t));
        }
        assert_eq!(Transform::from_name("bubble"), None);
    }

    #[test]
    fn apply_dispatches() {
        assert_eq!(Transform::HiraToKata.apply("かな"), "カナ");
        assert_eq!(Transform::from_name("circled").unwrap().apply("A"), "Ⓐ");
        assert_eq!(Transform::NormalizeDecimal.apply("12345"), "12,345");
    }
}
