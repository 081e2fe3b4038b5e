//! Process abstraction.
//!
//! A process runs an ordered list of stages over one text. `DynamicProcess`
//! holds the stages behind `Arc<dyn Stage>`, so the list can be chosen at run
//! time (cleaner mode, custom stages) and shared across threads.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

#[derive(Default, Clone)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage + Send + Sync>; 8]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    #[inline(always)]
    pub fn push_arc(mut self, stage: Arc<dyn Stage + Send + Sync>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Stage names in run order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx)? {
                continue;
            }
            text = stage.apply(text, ctx)?;
            tracing::trace!(
                stage = stage.name(),
                locale = ctx.locale.code,
                len = text.len(),
                "stage applied"
            );
        }
        Ok(text)
    }
}
