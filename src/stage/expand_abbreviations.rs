use crate::{
    context::Context,
    locale::{Locale, LocaleError},
    stage::{Stage, StageError},
};
use regex::NoExpand;
use std::borrow::Cow;

/// Replace abbreviations such as `Dr.` with their expansion.
///
/// Rules run once each, in table order. Matching ignores case and needs a
/// word boundary before the abbreviation and a literal `.` after it; the
/// period is consumed. Keys and expansions come in the context's
/// [`Spelling`]: authored keys match raw text (`bât.`), folded keys match text
/// that has been through [`Transliterate`] (`bat.`).
///
/// [`Spelling`]: crate::locale::Spelling
/// [`Transliterate`]: crate::stage::transliterate::Transliterate
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandAbbreviations;

impl Stage for ExpandAbbreviations {
    fn name(&self) -> &'static str {
        "expand_abbreviations"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        if !text.contains('.') {
            return Ok(false);
        }
        Ok(ctx
            .abbreviations()
            .iter()
            .any(|rule| rule.pattern.is_match(text)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        Ok(expand_all(text, ctx))
    }
}

fn expand_all<'a>(text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    ctx.abbreviations().iter().fold(text, |text, rule| {
        let replaced = match rule.pattern.replace_all(&text, NoExpand(&rule.expansion)) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        match replaced {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    })
}

/// Expand abbreviations without going through a cleaner, with the words as
/// authored in the locale table.
pub fn expand_abbreviations(text: &str, locale: Locale) -> Result<String, LocaleError> {
    let ctx = Context::new(locale)?;
    Ok(expand_all(Cow::Borrowed(text), &ctx).into_owned())
}
