//! Core cleaning stage abstraction.
//!
//! A stage is one rewrite of the text. Stages are checked with a cheap
//! `needs_apply` scan first; only when it says yes does `apply` run, so a
//! stage that has nothing to do never allocates.

pub mod collapse_whitespace;
pub mod expand_abbreviations;
pub mod expand_numbers;
pub mod lower_case;
pub mod retain_vocabulary;
pub mod transliterate;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Cleaning failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single cleaning step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    ///
    /// Must be exact: `true` iff `apply` would change the text.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Unchanged input is handed back as is.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
