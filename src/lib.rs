pub mod collation;
pub mod context;
pub mod harf;
pub mod helpers;
pub mod numerals;
pub mod process;
pub mod profile;
pub mod script;
pub mod stage;
#[cfg(test)]
pub mod testing;

pub use collation::{
    CollationKey, PERSIAN_ALPHABET, UNRANKED, collation_key, compare_collation,
    compare_first_letter, first_letter_rank, rank, sort_alphabetically, sort_by_collation_key,
};
pub use context::{Context, Digits};
pub use harf::{Harf, HarfError};
pub use helpers::{
    DEFAULT_DATE_FORMAT, DEFAULT_RANDOM_LENGTH, DateError, Parity, ServerVars, client_ip,
    countries, country_name, human_readable_date, odd_or_even, random_string,
    random_string_with, remove_special_characters,
};
pub use numerals::{to_ascii_digits, to_persian_digits};
pub use script::is_likely_persian;
pub use stage::normalize_digits::NormalizeDigits;
pub use stage::remove_special_chars::RemoveSpecialChars;
