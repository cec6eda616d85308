//! Numeric literal normalization inside free text.
//!
//! Decimal runs get a thousands separator in their integer part; fractions
//! and exponents are copied verbatim. Hex runs keep their digits and markers
//! and only have a sign moved in front of the `0x` prefix.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::settings::settings;

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(0x)?([+\-]?)([0-9a-f]+(\.[0-9a-f]+)?|\.[0-9a-f]+)(h)?")
            .expect("hex pattern must compile")
    })
}

fn decimal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([+\-]?)([0-9]+(\.[0-9]+)?|\.[0-9]+)(e[+\-]?[0-9]+)?")
            .expect("decimal pattern must compile")
    })
}

/// A matched digit run split into integer part and fractional remainder.
struct NumberParts<'a> {
    integer: &'a str,
    fraction: &'a str,
}

/// Split `body` (group 3 / group 2 of the patterns) using the optional
/// fraction capture. A run starting with `.` has no integer part.
fn split_number<'a>(body: &'a str, fraction: Option<&'a str>) -> NumberParts<'a> {
    match fraction {
        Some(frac) => NumberParts {
            integer: body.strip_suffix(frac).unwrap_or(body),
            fraction: frac,
        },
        None if body.starts_with('.') => NumberParts {
            integer: "",
            fraction: body,
        },
        None => NumberParts {
            integer: body,
            fraction: "",
        },
    }
}

fn group<'h>(caps: &Captures<'h>, i: usize) -> &'h str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Normalize hexadecimal runs: `0x-1f` → `-0x1f`. Digits are never grouped.
pub fn normalize_hex(text: &str) -> String {
    hex_regex()
        .replace_all(text, |caps: &Captures| {
            let prefix = group(caps, 1);
            let sign = group(caps, 2);
            let parts = split_number(group(caps, 3), caps.get(4).map(|m| m.as_str()));
            let suffix = group(caps, 5);
            [sign, prefix, parts.integer, parts.fraction, suffix].concat()
        })
        .into_owned()
}

/// Normalize decimal runs: `1234567.89` → `1,234,567.89`.
pub fn normalize_decimal(text: &str) -> String {
    let separator = settings().numeric.separator.as_str();
    decimal_regex()
        .replace_all(text, |caps: &Captures| {
            let sign = group(caps, 1);
            let parts = split_number(group(caps, 2), caps.get(3).map(|m| m.as_str()));
            let exponent = group(caps, 4);
            let mut out = String::with_capacity(caps[0].len() * 2);
            out.push_str(sign);
            out.push_str(&group_thousands(parts.integer, separator));
            out.push_str(parts.fraction);
            out.push_str(exponent);
            out
        })
        .into_owned()
}

/// Largest number of fractional digits [`format_currency`] renders. An
/// `f64` carries about 17 significant digits, so further places are noise.
pub const MAX_CURRENCY_PRECISION: u32 = 20;

/// Round `amount` up (toward +∞) at `precision` decimal places and format it
/// with exactly `precision` fractional digits and a grouped integer part.
///
/// `format_currency(19.999, 2)` is `"20.00"`. `precision` is clamped to
/// [`MAX_CURRENCY_PRECISION`]. Non-finite amounts are returned as displayed
/// by `f64`.
pub fn format_currency(amount: f64, precision: u32) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let precision = precision.min(MAX_CURRENCY_PRECISION);
    let scaled = (amount * 10f64.powi(precision as i32)).ceil();
    let (negative, digits) = if scaled.is_finite() {
        (scaled < 0.0, format!("{:.0}", scaled.abs()))
    } else {
        // Far above 2^53, so `amount` is already whole.
        let zeros = "0".repeat(precision as usize);
        (amount < 0.0, format!("{:.0}{zeros}", amount.abs()))
    };
    let precision = precision as usize;
    let digits = if digits.len() <= precision {
        format!("{:0>width$}", digits, width = precision + 1)
    } else {
        digits
    };
    let (integer, fraction) = digits.split_at(digits.len() - precision);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer, &settings().numeric.separator));
    if precision > 0 {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Insert `separator` every three digits, counting from the right.
fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("", ","), "");
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("1234567", ","), "1,234,567");
        assert_eq!(group_thousands("123456", "_"), "123_456");
    }

    #[test]
    fn test_decimal_grouping() {
        assert_eq!(normalize_decimal("1234567.89"), "1,234,567.89");
        assert_eq!(normalize_decimal("-0.5e+10"), "-0.5e+10");
        assert_eq!(normalize_decimal("+12345E-3"), "+12,345E-3");
        assert_eq!(normalize_decimal(".123456"), ".123456");
        assert_eq!(normalize_decimal("1000.0001"), "1,000.0001");
    }

    #[test]
    fn test_decimal_in_text() {
        assert_eq!(
            normalize_decimal("total 1234 items, 56789 yen"),
            "total 1,234 items, 56,789 yen"
        );
        assert_eq!(normalize_decimal("v1.2.3"), "v1.2.3");
        assert_eq!(normalize_decimal("no digits"), "no digits");
    }

    #[test]
    fn test_decimal_already_grouped() {
        assert_eq!(normalize_decimal("1,234,567"), "1,234,567");
    }

    #[test]
    fn test_decimal_exponent_needs_digits() {
        assert_eq!(normalize_decimal("12345e"), "12,345e");
    }

    #[test]
    fn test_hex_markers_preserved() {
        assert_eq!(normalize_hex("0x1a2b3cH"), "0x1a2b3cH");
        assert_eq!(normalize_hex("ff.8h"), "ff.8h");
        assert_eq!(normalize_hex("0x.8"), "0x.8");
        assert_eq!(normalize_hex("1234567"), "1234567");
    }

    #[test]
    fn test_hex_sign_moves_before_prefix() {
        assert_eq!(normalize_hex("0x-1f"), "-0x1f");
        assert_eq!(normalize_hex("0X+FFh"), "+0XFFh");
        assert_eq!(normalize_hex("-ff"), "-ff");
    }

    #[test]
    fn test_hex_in_text() {
        assert_eq!(normalize_hex("addr 0x-10 ok"), "addr -0x10 ok");
        assert_eq!(normalize_hex("ぜろ"), "ぜろ");
    }

    #[test]
    fn test_currency_ceiling() {
        assert_eq!(format_currency(19.999, 2), "20.00");
        assert_eq!(format_currency(1234.5, 0), "1,235");
        assert_eq!(format_currency(1234.0, 0), "1,234");
        assert_eq!(format_currency(1234567.001, 2), "1,234,567.01");
        assert_eq!(format_currency(0.001, 2), "0.01");
    }

    #[test]
    fn test_currency_negative_rounds_toward_positive() {
        assert_eq!(format_currency(-1.239, 2), "-1.23");
        assert_eq!(format_currency(-0.001, 2), "0.00");
        assert_eq!(format_currency(-1234.9, 0), "-1,234");
    }

    #[test]
    fn test_currency_precision_is_clamped() {
        let twenty_zeros = "0".repeat(20);
        assert_eq!(format_currency(2.0, u32::MAX), format!("2.{twenty_zeros}"));
        assert_eq!(format_currency(1.5, 400), format!("1.5{}", "0".repeat(19)));
    }

    #[test]
    fn test_currency_huge_amount_at_max_precision() {
        let out = format_currency(1e300, 20);
        assert!(out.starts_with("1,000,000,000,000,000,0"), "{out}");
        assert!(out.ends_with(&format!(".{}", "0".repeat(20))), "{out}");
        assert!(format_currency(-1e300, 20).starts_with("-1,000,000"));
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN, 2), "NaN");
        assert_eq!(format_currency(f64::INFINITY, 0), "inf");
    }

    proptest! {
        #[test]
        fn decimal_only_inserts_separators(s in "[0-9a-z.+\\- ]{0,40}") {
            let out = normalize_decimal(&s);
            prop_assert_eq!(out.replace(',', ""), s);
        }

        #[test]
        fn decimal_is_idempotent(s in "[0-9.e+\\- ]{0,40}") {
            let once = normalize_decimal(&s);
            prop_assert_eq!(normalize_decimal(&once), once);
        }

        #[test]
        fn hex_keeps_every_character(s in "[0-9a-fx.h+\\- ]{0,40}") {
            let mut before: Vec<char> = s.chars().collect();
            let mut after: Vec<char> = normalize_hex(&s).chars().collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(after, before);
        }
    }
}
