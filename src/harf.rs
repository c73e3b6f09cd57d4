use thiserror::Error;

use crate::{
    collation::CollationKey,
    context::{Context, Digits},
    process::{DynProcess, Process},
    profile::{Profile, ProfileError},
    script::is_likely_persian,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum HarfError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// A configured normalization pipeline plus the context it runs under.
///
/// ```
/// use harf::{Harf, NormalizeDigits, RemoveSpecialChars};
///
/// let harf = Harf::builder()
///     .add_stage(NormalizeDigits)
///     .add_stage(RemoveSpecialChars)
///     .build();
/// assert_eq!(harf.normalize("۱۴۰۳/۰۲/۱۵").unwrap(), "14030215");
/// ```
pub struct Harf {
    ctx: Context,
    pipeline: DynProcess,
}

impl Harf {
    pub fn builder() -> HarfBuilder {
        HarfBuilder::default()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn normalize<'a>(&self, text: impl Into<Cow<'a, str>>) -> Result<Cow<'a, str>, HarfError> {
        let results = self.pipeline.process(text.into(), &self.ctx)?;
        Ok(results)
    }

    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, HarfError> {
        let results = profile.run(text.into(), &self.ctx)?;
        Ok(results)
    }

    /// Normalize `text`, then build its collation key if it looks Persian.
    ///
    /// `None` means the script gate rejected the text; callers usually fall
    /// back to ordinary string ordering for those entries.
    pub fn sort_key(&self, text: &str) -> Result<Option<CollationKey>, HarfError> {
        let normalized = self.normalize(text)?;
        if !is_likely_persian(&normalized) {
            return Ok(None);
        }
        Ok(Some(CollationKey::new(&normalized)))
    }
}

#[derive(Default)]
pub struct HarfBuilder {
    ctx: Context,
    stages: DynProcess,
}

impl HarfBuilder {
    pub fn digits(mut self, digits: Digits) -> Self {
        self.ctx.digits = digits;
        self
    }

    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages = self.stages.push(stage);
        self
    }

    pub fn build(self) -> Harf {
        tracing::debug!(stages = self.stages.len(), digits = ?self.ctx.digits, "built harf pipeline");
        Harf {
            ctx: self.ctx,
            pipeline: self.stages,
        }
    }
}
