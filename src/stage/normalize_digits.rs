//! stage/normalize_digits.rs
//! Rewrite Persian / Arabic-Indic / ASCII digits to the numeral system named
//! by `Context::digits`. Zero-copy when the text is already in that system.
//! CharMapper path: pure 1→1 mapping.

use crate::{
    context::{Context, Digits},
    numerals::{ARABIC_DIGITS, ASCII_DIGITS, PERSIAN_DIGITS, ascii_digit_of, persian_digit_of},
    stage::{CharMapper, Stage, StageError},
};
use std::borrow::Cow;
use std::iter::FusedIterator;

pub struct NormalizeDigits;

#[inline(always)]
fn is_foreign_digit(c: char, target: Digits) -> bool {
    match target {
        Digits::Latin => PERSIAN_DIGITS.contains(&c) || ARABIC_DIGITS.contains(&c),
        Digits::Persian => ASCII_DIGITS.contains(&c) || ARABIC_DIGITS.contains(&c),
    }
}

#[inline(always)]
fn convert(c: char, target: Digits) -> char {
    match target {
        Digits::Latin => ascii_digit_of(c),
        Digits::Persian => persian_digit_of(c),
    }
}

impl Stage for NormalizeDigits {
    fn name(&self) -> &'static str {
        "normalize_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(|c| is_foreign_digit(c, ctx.digits)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let target = ctx.digits;
        Ok(Cow::Owned(text.chars().map(|c| convert(c, target)).collect()))
    }

    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        Some(self)
    }
}

impl CharMapper for NormalizeDigits {
    #[inline(always)]
    fn map(&self, c: char, ctx: &Context) -> Option<char> {
        Some(convert(c, ctx.digits))
    }

    fn bind<'a>(&self, text: &'a str, ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a> {
        let target = ctx.digits;
        Box::new(text.chars().map(move |c| convert(c, target)))
    }
}
