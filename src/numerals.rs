//! Persian and Arabic-Indic numeral tables and conversions.
//!
//! Persian (`۰`–`۹`, U+06F0..U+06F9) and Arabic-Indic (`٠`–`٩`, U+0660..U+0669)
//! digits are disjoint blocks, so each conversion is a position-wise table
//! substitution and the passes never interact.

use std::borrow::Cow;

pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
pub const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
pub const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Value of a Persian digit glyph, if `c` is one.
#[inline(always)]
pub fn persian_digit_value(c: char) -> Option<u8> {
    PERSIAN_DIGITS.iter().position(|&d| d == c).map(|i| i as u8)
}

/// Value of an Arabic-Indic digit glyph, if `c` is one.
#[inline(always)]
pub fn arabic_digit_value(c: char) -> Option<u8> {
    ARABIC_DIGITS.iter().position(|&d| d == c).map(|i| i as u8)
}

#[inline(always)]
fn substitute(c: char, from: &[char; 10], to: &[char; 10]) -> char {
    match from.iter().position(|&d| d == c) {
        Some(i) => to[i],
        None => c,
    }
}

#[inline(always)]
pub(crate) fn ascii_digit_of(c: char) -> char {
    let c = substitute(c, &PERSIAN_DIGITS, &ASCII_DIGITS);
    substitute(c, &ARABIC_DIGITS, &ASCII_DIGITS)
}

#[inline(always)]
pub(crate) fn persian_digit_of(c: char) -> char {
    let c = substitute(c, &ASCII_DIGITS, &PERSIAN_DIGITS);
    substitute(c, &ARABIC_DIGITS, &PERSIAN_DIGITS)
}

/// Rewrite every `from` glyph in `text` to its `to` counterpart.
/// Borrowed when `text` contains none of them.
fn translate<'a>(text: Cow<'a, str>, from: &[char; 10], to: &[char; 10]) -> Cow<'a, str> {
    if !text.chars().any(|c| from.contains(&c)) {
        return text;
    }
    Cow::Owned(text.chars().map(|c| substitute(c, from, to)).collect())
}

/// Replace Persian and Arabic-Indic digits with ASCII digits.
///
/// ```
/// assert_eq!(harf::to_ascii_digits("۱۴۰۳/٠٢/۱۵"), "1403/02/15");
/// ```
pub fn to_ascii_digits(text: &str) -> Cow<'_, str> {
    let text = translate(Cow::Borrowed(text), &PERSIAN_DIGITS, &ASCII_DIGITS);
    translate(text, &ARABIC_DIGITS, &ASCII_DIGITS)
}

/// Replace ASCII and Arabic-Indic digits with Persian digits.
pub fn to_persian_digits(text: &str) -> Cow<'_, str> {
    let text = translate(Cow::Borrowed(text), &ASCII_DIGITS, &PERSIAN_DIGITS);
    translate(text, &ARABIC_DIGITS, &PERSIAN_DIGITS)
}
