use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Unicode lowercase, zero-copy when nothing is uppercase.
///
/// Uses `str::to_lowercase`, so a word-final `Σ` becomes `ς`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

#[inline(always)]
fn lowers(c: char) -> bool {
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(text.bytes().any(|b| b.is_ascii_uppercase()));
        }
        Ok(text.chars().any(lowers))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Ok(Cow::Owned(owned));
        }
        Ok(Cow::Owned(text.to_lowercase()))
    }
}
