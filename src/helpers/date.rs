//! Human readable date formatting.
//!
//! Parsing is permissive: input that matches none of the accepted layouts is
//! formatted as the Unix epoch instead of failing. Only a broken *format
//! pattern* is an error.

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, Utc,
    format::{Item, StrftimeItems},
};
use std::fmt::Write;
use thiserror::Error;
use tracing::debug;

/// `March 5, 2024, 2:07 pm`
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y, %-I:%M %P";

const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date format pattern `{0}`")]
    InvalidFormat(String),
}

/// Parse `input` with the accepted layouts, `None` if none matches.
///
/// Naive date-times are taken as UTC.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Some(secs) = input.strip_prefix('@') {
        return secs
            .parse::<i64>()
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, 0));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
    {
        return Some(dt.and_utc());
    }
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Format `date` with a strftime-style `format` such as
/// [`DEFAULT_DATE_FORMAT`].
///
/// ```
/// use harf::{DEFAULT_DATE_FORMAT, human_readable_date};
///
/// assert_eq!(
///     human_readable_date("2024-03-05 14:07:00", DEFAULT_DATE_FORMAT).unwrap(),
///     "March 5, 2024, 2:07 pm",
/// );
/// ```
pub fn human_readable_date(date: &str, format: &str) -> Result<String, DateError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidFormat(format.to_owned()));
    }
    let when = parse_date(date).unwrap_or_else(|| {
        debug!(input = date, "unparseable date, formatting the unix epoch");
        DateTime::<Utc>::default()
    });
    // Some specifiers are accepted by the parser but only valid for parsing
    // (`%#z`); chrono reports those as a formatting error.
    let mut out = String::with_capacity(format.len() * 2);
    write!(out, "{}", when.format_with_items(items.iter()))
        .map_err(|_| DateError::InvalidFormat(format.to_owned()))?;
    Ok(out)
}
