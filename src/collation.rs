//! Persian alphabet collation.
//!
//! Every letter of the Persian alphabet gets a fixed rank. A collation key is
//! the concatenation of the two-digit, zero-padded ranks of the ranked code
//! points in a string, so plain lexicographic comparison of keys follows
//! Persian alphabetical order. Unranked code points (spaces, punctuation,
//! Latin text) are skipped, which means distinct strings may share a key.
//!
//! `آ` ranks 0, one below `ا`, so it sorts first both by key (`"00"`) and by
//! first letter.

use phf::{Map, phf_map};
use std::cmp::Ordering;
use std::fmt;

/// Persian alphabet in canonical order. A letter's index is its rank.
pub const PERSIAN_ALPHABET: [char; 33] = [
    'آ', 'ا', 'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص',
    'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'و', 'ه', 'ی',
];

/// Rank used for first-letter comparison when the first code point is not
/// a Persian letter (or the string is empty). Greater than every real rank.
pub const UNRANKED: u8 = 99;

/// Width of one rank token inside a collation key. Ranks stay below 100.
const RANK_WIDTH: usize = 2;

static LETTER_RANK: Map<char, u8> = phf_map! {
    'آ' => 0,
    'ا' => 1, 'ب' => 2, 'پ' => 3, 'ت' => 4, 'ث' => 5,
    'ج' => 6, 'چ' => 7, 'ح' => 8, 'خ' => 9, 'د' => 10,
    'ذ' => 11, 'ر' => 12, 'ز' => 13, 'ژ' => 14, 'س' => 15,
    'ش' => 16, 'ص' => 17, 'ض' => 18, 'ط' => 19, 'ظ' => 20,
    'ع' => 21, 'غ' => 22, 'ف' => 23, 'ق' => 24, 'ک' => 25,
    'گ' => 26, 'ل' => 27, 'م' => 28, 'ن' => 29, 'و' => 30,
    'ه' => 31, 'ی' => 32,
};

/// Alphabet rank of `c`, or `None` if it is not a Persian letter.
#[inline(always)]
pub fn rank(c: char) -> Option<u8> {
    LETTER_RANK.get(&c).copied()
}

/// Build the collation key of `text`.
///
/// ```
/// assert_eq!(harf::collation_key("اب"), "0102");
/// assert_eq!(harf::collation_key("ی"), "32");
/// assert_eq!(harf::collation_key("abc"), "");
/// ```
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for r in text.chars().filter_map(rank) {
        push_rank(&mut key, r);
    }
    key
}

#[inline(always)]
fn push_rank(key: &mut String, r: u8) {
    use std::fmt::Write;
    // Writing into a String cannot fail.
    let _ = write!(key, "{:0width$}", r, width = RANK_WIDTH);
}

/// Rank of the first code point of `text`, or [`UNRANKED`].
#[inline]
pub fn first_letter_rank(text: &str) -> u8 {
    text.chars().next().and_then(rank).unwrap_or(UNRANKED)
}

/// Order two strings by the rank of their first letter only.
#[inline]
pub fn compare_first_letter(a: &str, b: &str) -> Ordering {
    first_letter_rank(a).cmp(&first_letter_rank(b))
}

/// Order two strings by their collation keys.
pub fn compare_collation(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Sort `items` by the collation key of a string field.
///
/// Keys are computed once per element.
pub fn sort_by_collation_key<T, F>(items: &mut [T], field: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| collation_key(field(item)));
}

/// Sort `items` by the first letter of a string field in Persian alphabet
/// order. Stable: elements sharing a first letter keep their relative order,
/// and elements without a ranked first letter go last.
pub fn sort_alphabetically<T, F>(items: &mut [T], field: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_first_letter(field(a), field(b)));
}

/// Owned collation key. Orders exactly like the key strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CollationKey(String);

impl CollationKey {
    pub fn new(text: &str) -> Self {
        Self(collation_key(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of ranked letters that contributed to the key.
    #[inline]
    pub fn letters(&self) -> usize {
        self.0.len() / RANK_WIDTH
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CollationKey {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for CollationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
