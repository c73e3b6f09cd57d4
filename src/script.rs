//! Persian script detection.
//!
//! This is a membership pre-filter, not a validator: one hit anywhere in the
//! string is enough.

/// Code points that mark a string as likely Persian.
///
/// Kept verbatim for compatibility with existing data: it includes U+0020
/// SPACE, U+200D ZERO WIDTH JOINER, U+0640 TATWEEL, U+07AC and the lam-alef
/// presentation forms, and it does not include `پ`.
pub static PERSIAN_SCRIPT_CHARS: &[char] = &[
    'ا', 'ب', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص', 'ض', 'ط',
    'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'و', 'ه', 'ی', 'ئ',
    '\u{0020}', '\u{200D}', '\u{0640}',
    '\u{FEFB}', '\u{FEF7}', '\u{FEF9}', '\u{FEFA}', '\u{FEF6}',
    '\u{07AC}', 'إ', 'آ', 'ؤ',
];

#[inline(always)]
pub fn is_persian_script_char(c: char) -> bool {
    PERSIAN_SCRIPT_CHARS.contains(&c)
}

/// `true` if any code point of `text` is in [`PERSIAN_SCRIPT_CHARS`].
///
/// ```
/// assert!(harf::is_likely_persian("hi سلام"));
/// assert!(!harf::is_likely_persian("hello"));
/// ```
pub fn is_likely_persian(text: &str) -> bool {
    text.chars().any(is_persian_script_char)
}
