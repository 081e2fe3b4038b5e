pub mod preset;

use crate::{
    context::Context,
    process::{DynamicProcess, Process},
    stage::Stage,
};
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Cleaning failed at profile `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A named, ordered stage list.
#[derive(Clone)]
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, ProfileError> {
        self.pipeline
            .process(text, ctx)
            .map_err(|e| ProfileError::Failed(self.name, e.to_string()))
    }
}

impl Profile<DynamicProcess> {
    pub fn plugin_builder(name: &'static str) -> DynProfileBuilder {
        DynProfileBuilder {
            name,
            pipeline: DynamicProcess::new(),
        }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.stage_names()
    }
}

pub struct DynProfileBuilder {
    name: &'static str,
    pipeline: DynamicProcess,
}

impl DynProfileBuilder {
    pub fn add_stage<T: Stage + Send + Sync + 'static>(self, stage: T) -> Self {
        Self {
            pipeline: self.pipeline.push(stage),
            ..self
        }
    }

    pub fn add_shared_stage(self, stage: Arc<dyn Stage + Send + Sync>) -> Self {
        Self {
            pipeline: self.pipeline.push_arc(stage),
            ..self
        }
    }

    pub fn build(self) -> Profile<DynamicProcess> {
        tracing::debug!(
            profile = self.name,
            stages = self.pipeline.len(),
            "built cleaning profile"
        );
        Profile {
            name: self.name,
            pipeline: self.pipeline,
        }
    }
}
