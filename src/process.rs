//! Process abstraction.
//! `ChainedProcess` is monomorphised: the compiler knows the concrete type of
//! every stage and can inline the whole chain. `DynProcess` is the dynamic
//! fallback; when every stage exposes a `CharMapper` it rewrites the text in
//! one fused pass instead of one pass per stage.
use crate::{
    context::Context,
    stage::{CharMapper, Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let current: Cow<'_, str> = self.previous.process(text, ctx)?;
        if !self.stage.needs_apply(&current, ctx)? {
            trace!(stage = self.stage.name(), "skipped");
            return Ok(current);
        }
        trace!(stage = self.stage.name(), "applied");
        self.stage.apply(current, ctx)
    }
}

#[derive(Default)]
pub struct DynProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl DynProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn push_arc(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Every stage as a char mapper, or `None` if any stage cannot be
    /// expressed as one.
    fn char_mappers(&self, ctx: &Context) -> Option<SmallVec<[&dyn CharMapper; 8]>> {
        self.stages.iter().map(|s| s.as_char_mapper(ctx)).collect()
    }

    fn process_staged<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx)? {
                trace!(stage = stage.name(), "skipped");
                continue;
            }
            trace!(stage = stage.name(), "applied");
            text = stage.apply(text, ctx)?;
        }
        Ok(text)
    }
}

impl Process for DynProcess {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let Some(mappers) = self.char_mappers(ctx) else {
            return self.process_staged(text, ctx);
        };
        // Mappers are pure per-char functions: if no stage touches the input,
        // none can touch the output either.
        let mut active = 0usize;
        for stage in &self.stages {
            if stage.needs_apply(&text, ctx)? {
                active += 1;
            }
        }
        if active == 0 {
            return Ok(text);
        }
        if let [mapper] = mappers.as_slice() {
            return Ok(Cow::Owned(mapper.bind(&text, ctx).collect()));
        }
        trace!(stages = mappers.len(), active, "fused");
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if let Some(c) = mappers.iter().try_fold(c, |c, m| m.map(c, ctx)) {
                out.push(c);
            }
        }
        Ok(Cow::Owned(out))
    }
}
