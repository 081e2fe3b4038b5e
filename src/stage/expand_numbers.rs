use crate::{
    context::Context,
    number,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Spell out every number with the locale's separators and phrases.
///
/// See [`crate::number`] for the individual steps. After this stage the text
/// contains no ASCII digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandNumbers;

impl Stage for ExpandNumbers {
    fn name(&self) -> &'static str {
        "expand_numbers"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.bytes().any(|b| b.is_ascii_digit()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        Ok(number::expand(text, ctx))
    }
}
