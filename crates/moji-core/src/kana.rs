//! Kana script conversion and voicing.
//!
//! Hiragana and katakana sit 0x60 code points apart, so script conversion is
//! a per-character offset. Voicing is table-driven: a base kana followed by a
//! combining mark is folded into the precomposed voiced kana where Unicode
//! has one.

use crate::tables;
use crate::unicode::{
    is_combining_mark, is_kana, is_shiftable_hiragana, is_shiftable_katakana, COMBINING_SEMI_VOICED,
    COMBINING_VOICED, KANA_OFFSET,
};

/// Convert hiragana to katakana. Everything else is passed through unchanged.
pub fn hira_to_kata(text: &str) -> String {
    text.chars().map(shift_hiragana).collect()
}

/// Convert katakana to hiragana. Everything else is passed through unchanged.
pub fn kata_to_hira(text: &str) -> String {
    text.chars().map(shift_katakana).collect()
}

/// Hiragana become katakana and katakana become hiragana, in one pass.
pub fn swap_kana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_shiftable_hiragana(c) {
                shift_hiragana(c)
            } else {
                shift_katakana(c)
            }
        })
        .collect()
}

/// Remove dakuten and handakuten: が → か, ぱ → は, combining marks dropped.
pub fn devoice(text: &str) -> String {
    let stripped: String = text.chars().filter(|&c| !is_combining_mark(c)).collect();
    tables::global().devoice().replacer.replace(&stripped)
}

/// Apply handakuten to every kana that has a semi-voiced form.
///
/// Kana without one keep a trailing combining U+309A.
pub fn semi_voice(text: &str) -> String {
    let set = tables::global();
    set.semi_voice()
        .replacer
        .replace(&mark_kana(text, COMBINING_SEMI_VOICED))
}

/// Apply dakuten to every kana that has a voiced form.
///
/// Kana without one keep a trailing combining U+3099.
pub fn full_voice(text: &str) -> String {
    let set = tables::global();
    set.full_voice()
        .replacer
        .replace(&mark_kana(text, COMBINING_VOICED))
}

/// Replace each kana with its plain form followed by `mark`.
fn mark_kana(text: &str, mark: char) -> String {
    let devoice = &tables::global().devoice().replacer;
    let mut out = String::with_capacity(text.len() * 2);
    let mut buf = [0u8; 4];
    for c in text.chars() {
        if is_kana(c) {
            let chr: &str = c.encode_utf8(&mut buf);
            out.push_str(devoice.lookup(chr).unwrap_or(chr));
            out.push(mark);
        } else {
            out.push(c);
        }
    }
    out
}

fn shift_hiragana(c: char) -> char {
    if is_shiftable_hiragana(c) {
        char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

fn shift_katakana(c: char) -> char {
    if is_shiftable_katakana(c) {
        char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}
