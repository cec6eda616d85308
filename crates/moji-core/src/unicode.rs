//! Character-level classification for the kana blocks.

use std::sync::OnceLock;

/// Distance between a hiragana code point and its katakana counterpart.
pub const KANA_OFFSET: u32 = 0x60;

/// Combining dakuten (voiced sound mark).
pub const COMBINING_VOICED: char = '\u{3099}';
/// Combining handakuten (semi-voiced sound mark).
pub const COMBINING_SEMI_VOICED: char = '\u{309A}';

/// Hiragana that have a katakana counterpart at +0x60: the syllables
/// ぁ..ゖ (U+3041..U+3096) and the marks ゝゞゟ (U+309D..U+309F).
pub fn is_shiftable_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309F}').contains(&c)
}

/// Katakana that have a hiragana counterpart at -0x60: the syllables
/// ァ..ヶ (U+30A1..U+30F6) and the marks ヽヾヿ (U+30FD..U+30FF).
pub fn is_shiftable_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c) || ('\u{30FD}'..='\u{30FF}').contains(&c)
}

/// Kana that can carry a voicing mark. Includes the katakana-only ヷ..ヺ and
/// the iteration marks, excludes the sound marks themselves.
pub fn is_kana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
        || ('\u{309D}'..='\u{309E}').contains(&c)
        || ('\u{30A1}'..='\u{30FA}').contains(&c)
        || ('\u{30FD}'..='\u{30FE}').contains(&c)
}

pub fn is_combining_mark(c: char) -> bool {
    c == COMBINING_VOICED || c == COMBINING_SEMI_VOICED
}

/// Every code point from あ to ん, in order.
pub fn hiragana_range() -> &'static str {
    static RANGE: OnceLock<String> = OnceLock::new();
    RANGE.get_or_init(|| char_range('あ', 'ん'))
}

/// Every code point from ア to ン, in order.
pub fn katakana_range() -> &'static str {
    static RANGE: OnceLock<String> = OnceLock::new();
    RANGE.get_or_init(|| char_range('ア', 'ン'))
}

fn char_range(head: char, tail: char) -> String {
    (head..=tail).collect()
}
