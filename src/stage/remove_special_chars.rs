//! stage/remove_special_chars.rs
//! Strip a fixed class of ASCII punctuation: `\ / . , - _ * ` ' " ; :`
//! Zero-copy when none of them is present.
//! CharMapper path: pure filter.

use crate::{
    context::Context,
    stage::{CharMapper, Stage, StageError},
};
use memchr::memchr3;
use std::borrow::Cow;
use std::iter::FusedIterator;

/// Characters removed by [`RemoveSpecialChars`].
pub const SPECIAL_CHARS: [char; 12] = ['\\', '/', '.', ',', '-', '_', '*', '`', '\'', '"', ';', ':'];

#[inline(always)]
pub fn is_special_char(c: char) -> bool {
    matches!(
        c,
        '\\' | '/' | '.' | ',' | '-' | '_' | '*' | '`' | '\'' | '"' | ';' | ':'
    )
}

// All targets are ASCII, so a byte scan is exact on UTF-8 input.
#[inline(always)]
fn contains_special(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr3(b'\\', b'/', b'.', bytes).is_some()
        || memchr3(b',', b'-', b'_', bytes).is_some()
        || memchr3(b'*', b'`', b'\'', bytes).is_some()
        || memchr3(b'"', b';', b':', bytes).is_some()
}

/// Remove every [`SPECIAL_CHARS`] member from `text`. Borrowed when there is
/// nothing to remove.
pub fn strip_special_chars(text: &str) -> Cow<'_, str> {
    if !contains_special(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|&c| !is_special_char(c)).collect())
}

pub struct RemoveSpecialChars;

impl Stage for RemoveSpecialChars {
    fn name(&self) -> &'static str {
        "remove_special_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(contains_special(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_special(&text) {
            return Ok(text);
        }
        Ok(Cow::Owned(strip_special_chars(&text).into_owned()))
    }

    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for RemoveSpecialChars {
    #[inline(always)]
    fn map(&self, c: char, _ctx: &Context) -> Option<char> {
        if is_special_char(c) { None } else { Some(c) }
    }

    fn bind<'a>(&self, text: &'a str, _ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        Box::new(text.chars().filter(|&c| !is_special_char(c)))
    }
}
