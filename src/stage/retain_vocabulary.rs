use crate::{
    context::Context,
    stage::{Stage, StageError, collapse_whitespace::is_space},
};
use std::borrow::Cow;

/// Replace every character outside the locale's symbol set with a space, so
/// `and/or` reads as two words rather than one.
///
/// Whitespace is kept whatever its kind; [`CollapseWhitespace`] turns it and
/// the inserted spaces into single plain spaces afterwards.
///
/// [`CollapseWhitespace`]: crate::stage::collapse_whitespace::CollapseWhitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct RetainVocabulary;

#[inline(always)]
fn keeps(c: char, ctx: &Context) -> bool {
    is_space(c) || ctx.rules.in_vocabulary(c)
}

impl Stage for RetainVocabulary {
    fn name(&self) -> &'static str {
        "retain_vocabulary"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.chars().all(|c| keeps(c, ctx)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        Ok(Cow::Owned(
            text.chars()
                .map(|c| if keeps(c, ctx) { c } else { ' ' })
                .collect(),
        ))
    }
}
