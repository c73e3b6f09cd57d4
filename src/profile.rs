//! Named stage chains with their own numeral target.
//!
//! A profile may pin the [`Digits`] it renders with. A pinned profile ignores
//! the caller's digit setting, so `preset::display()` always produces Persian
//! numerals and `preset::collation()` always produces ASCII ones. An unpinned
//! profile follows whatever context it is run under.
pub mod preset;

use crate::{
    collation::CollationKey,
    context::{Context, Digits},
    process::{ChainedProcess, DynProcess, EmptyProcess, Process},
    script::is_likely_persian,
    stage::Stage,
};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile `{0}` failed: {1}")]
    Failed(&'static str, String),
}

pub struct Profile<P: Process> {
    name: &'static str,
    digits: Option<Digits>,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Numeral system this profile is pinned to, if any.
    #[inline]
    pub fn digits(&self) -> Option<Digits> {
        self.digits
    }

    /// The context stages actually see: `ctx` with the pinned digits applied.
    #[inline]
    pub fn effective_context(&self, ctx: &Context) -> Context {
        match self.digits {
            Some(digits) => Context { digits },
            None => *ctx,
        }
    }

    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, ProfileError> {
        let ctx = self.effective_context(ctx);
        self.pipeline
            .process(text, &ctx)
            .map_err(|e| ProfileError::Failed(self.name, e.to_string()))
    }

    /// Run the profile, then key the result if it looks Persian.
    pub fn collation_key(
        &self,
        text: &str,
        ctx: &Context,
    ) -> Result<Option<CollationKey>, ProfileError> {
        let cleaned = self.run(Cow::Borrowed(text), ctx)?;
        Ok(is_likely_persian(&cleaned).then(|| CollationKey::new(&cleaned)))
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder {
            name,
            digits: None,
            pipeline: EmptyProcess,
        }
    }
}

impl Profile<DynProcess> {
    /// Builder for a profile assembled at runtime from boxed stages.
    pub fn plugin_builder(name: &'static str) -> ProfileBuilder<DynProcess> {
        ProfileBuilder {
            name,
            digits: None,
            pipeline: DynProcess::new(),
        }
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    digits: Option<Digits>,
    pipeline: P,
}

impl<P: Process> ProfileBuilder<P> {
    /// Pin the numeral system regardless of the caller's context.
    pub fn digits(mut self, digits: Digits) -> Self {
        self.digits = Some(digits);
        self
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            digits: self.digits,
            pipeline: self.pipeline,
        }
    }
}

impl<P: StaticChain> ProfileBuilder<P> {
    pub fn add_stage<S: Stage>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            digits: self.digits,
            pipeline: ChainedProcess {
                stage,
                previous: self.pipeline,
            },
        }
    }
}

impl ProfileBuilder<DynProcess> {
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.pipeline = self.pipeline.push(stage);
        self
    }
}

/// Processes that grow by static chaining. `DynProcess` grows with
/// [`ProfileBuilder::push`] instead.
pub trait StaticChain: Process {}
impl StaticChain for EmptyProcess {}
impl<S: Stage, P: Process> StaticChain for ChainedProcess<S, P> {}
