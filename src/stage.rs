//! Core stage abstraction.
//!
//! A stage is one text rewrite with a cheap pre-check. `apply` works on a
//! `Cow<str>` and must hand the input back untouched (still borrowed) when
//! nothing changes, so a pipeline over clean text never allocates.
//!
//! Stages that are a pure per-character mapping also expose a [`CharMapper`]
//! through `as_char_mapper`. When every active stage of a dynamic process has
//! one, the process runs them all in a single pass over the text.

pub mod normalize_digits;
pub mod remove_special_chars;

use crate::context::Context;
use std::borrow::Cow;
use std::iter::FusedIterator;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Return `self` as a [`CharMapper`] iff this stage is a pure character
    /// mapping under `ctx`. The default opts out.
    #[inline]
    fn as_char_mapper(&self, _ctx: &Context) -> Option<&dyn CharMapper> {
        None
    }
}

/// Per-character form of a stage.
pub trait CharMapper: Send + Sync {
    /// Map a single Unicode scalar value.
    /// Return `None` if the character should be **removed**.
    fn map(&self, c: char, ctx: &Context) -> Option<char>;

    /// Bind the mapper to a concrete `&str`.
    fn bind<'a>(&self, text: &'a str, ctx: &Context) -> Box<dyn FusedIterator<Item = char> + 'a>;
}
