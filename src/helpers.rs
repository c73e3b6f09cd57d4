//! Small standalone helpers that sit next to the Persian text utilities.

pub mod client_ip;
pub mod country;
pub mod date;
pub mod parity;
pub mod random;

pub use client_ip::{CLIENT_IP_KEYS, ServerVars, UNKNOWN_IP, client_ip};
pub use country::{countries, country_name};
pub use date::{DEFAULT_DATE_FORMAT, DateError, human_readable_date};
pub use parity::{Parity, odd_or_even};
pub use random::{DEFAULT_RANDOM_LENGTH, random_string, random_string_with};

use crate::stage::remove_special_chars::strip_special_chars;
use std::borrow::Cow;

/// Remove `\ / . , - _ * ` ' " ; :` from `text`.
///
/// ```
/// assert_eq!(
///     harf::remove_special_characters("Hello! This is a test-string, with some 'special' characters."),
///     "Hello! This is a teststring with some special characters",
/// );
/// ```
pub fn remove_special_characters(text: &str) -> Cow<'_, str> {
    strip_special_chars(text)
}
