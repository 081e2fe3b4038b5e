use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Replace every maximal run of whitespace with a single ASCII space.
///
/// Edges are not trimmed: `"  a  "` becomes `" a "`. A lone space is left
/// alone, a lone tab or newline becomes a space.
///
/// Whitespace is anything `char::is_whitespace` accepts, so NBSP, U+3000 and
/// the other Unicode spaces collapse too, plus the information separators
/// U+001C..=U+001F.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            let mut prev_ws = false;
            for &b in text.as_bytes() {
                let is_ws = is_space(b as char);
                if is_ws && (b != b' ' || prev_ws) {
                    return Ok(true);
                }
                prev_ws = is_ws;
            }
            return Ok(false);
        }

        let mut prev_ws = false;
        for c in text.chars() {
            let is_ws = is_space(c);
            if is_ws && (c != ' ' || prev_ws) {
                return Ok(true);
            }
            prev_ws = is_ws;
        }
        Ok(false)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        Ok(Cow::Owned(collapse(&text)))
    }
}

/// What the collapse treats as a space.
#[inline(always)]
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Single pass, one allocation.
fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_space(c) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Collapse whitespace without going through a cleaner. Locale independent.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    let mut prev_ws = false;
    let dirty = text.chars().any(|c| {
        let is_ws = is_space(c);
        let hit = is_ws && (c != ' ' || prev_ws);
        prev_ws = is_ws;
        hit
    });
    if dirty {
        Cow::Owned(collapse(text))
    } else {
        Cow::Borrowed(text)
    }
}
