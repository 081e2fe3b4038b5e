//! Locale-aware number expansion.
//!
//! Expansion runs a fixed sequence of regex rewrites over the text:
//!
//! 1. drop grouping separators inside digit runs,
//! 2. rewrite `£`, `€` and `$` amounts as counts plus unit words,
//! 3. read decimal separators as the locale's decimal word,
//! 4. spell ordinals (`21st`),
//! 5. spell every remaining digit run as a cardinal.
//!
//! After the last step no ASCII digit is left in the text.

pub mod currency;
pub mod words;

use crate::{
    context::Context,
    locale::{Locale, LocaleError},
};
use regex::{Captures, Regex, Replacer};
use std::{borrow::Cow, sync::LazyLock};

/// Non-ASCII signs the currency step consumes. Transliteration must leave them
/// in place.
pub(crate) const CURRENCY_SIGNS: [char; 2] = ['£', '€'];

static POUNDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"£([0-9,]*[0-9]+)").expect("valid pound pattern"));
static EUROS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"€([0-9,]*[0-9]+)").expect("valid euro pattern"));
static DOLLARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9.,]*[0-9]+)").expect("valid dollar pattern"));
static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)(?:st|nd|rd|th)").expect("valid ordinal pattern"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid number pattern"));

/// One rewrite of the expansion sequence.
pub type NumberStep = for<'a> fn(Cow<'a, str>, &Context) -> Cow<'a, str>;

/// The expansion sequence, in the order it runs.
pub const STEPS: [(&str, NumberStep); 5] = [
    ("remove_grouping", remove_grouping),
    ("expand_currency", expand_currency),
    ("expand_decimals", expand_decimals),
    ("expand_ordinals", expand_ordinals),
    ("expand_cardinals", expand_cardinals),
];

/// Expand every number in `text` into words for `locale`, spelled as in the
/// locale table.
pub fn normalize_numbers(text: &str, locale: Locale) -> Result<String, LocaleError> {
    let ctx = Context::new(locale)?;
    Ok(expand(Cow::Borrowed(text), &ctx).into_owned())
}

/// Run every step of the sequence. Borrowed input comes back borrowed when
/// nothing matched.
pub fn expand<'a>(text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    STEPS.iter().fold(text, |text, (name, step)| {
        let out = step(text, ctx);
        if matches!(out, Cow::Owned(_)) {
            tracing::trace!(step = *name, locale = ctx.locale.code, "number step rewrote text");
        }
        out
    })
}

/// `replace_all` that hands the input back untouched when nothing matched.
#[inline]
fn rewrite<'a, R: Replacer>(text: Cow<'a, str>, re: &Regex, rep: R) -> Cow<'a, str> {
    let replaced = match re.replace_all(&text, rep) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match replaced {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}

/// `1,000,000` → `1000000` (en_US); `1.000` → `1000` elsewhere.
pub fn remove_grouping<'a>(text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    let sep = ctx.rules.grouping_separator();
    rewrite(text, ctx.rules.grouped_number(), |caps: &Captures| {
        caps[0].replace(sep, "")
    })
}

/// `£5` → `5 pounds`, `€5` → `5 euros`, `$1.50` → `1 dollar, 50 cents`.
pub fn expand_currency<'a>(text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    let words = ctx.words();
    let text = rewrite(text, &POUNDS, |caps: &Captures| {
        format!("{} {}", &caps[1], words.pounds)
    });
    let text = rewrite(text, &EUROS, |caps: &Captures| {
        format!("{} {}", &caps[1], words.euros)
    });
    rewrite(text, &DOLLARS, |caps: &Captures| {
        currency::expand_dollars(&caps[1], ctx)
    })
}

/// `3.14` → `3 point 14` (en_US); `3,14` → `3 comma 14` elsewhere.
pub fn expand_decimals<'a>(text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    let sep = ctx.rules.decimal_separator();
    let spoken = format!(" {} ", ctx.words().decimal);
    rewrite(text, ctx.rules.decimal_number(), |caps: &Captures| {
        caps[0].replace(sep, &spoken)
    })
}

pub fn expand_ordinals<'a>(text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
    rewrite(text, &ORDINAL, |caps: &Captures| words::ordinal(&caps[1]))
}

pub fn expand_cardinals<'a>(text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    rewrite(text, &NUMBER, |caps: &Captures| spell_cardinal(&caps[0], ctx))
}

/// Spell one digit run.
///
/// Values strictly between 1000 and 3000 read like years, using the locale's
/// `two_thousand` and `hundred` phrases. Everything else is a plain cardinal.
pub fn spell_cardinal(digits: &str, ctx: &Context) -> String {
    let digits = words::canonical_digits(digits);
    let Some(n) = digits
        .parse::<usize>()
        .ok()
        .filter(|n| (1001..3000).contains(n))
    else {
        return words::cardinal(&digits, "");
    };

    let phrases = ctx.words();
    match n {
        2000 => phrases.two_thousand.clone(),
        2001..=2009 => format!(
            "{} {}",
            phrases.two_thousand,
            words::cardinal(&(n % 100).to_string(), "")
        ),
        _ if n % 100 == 0 => format!(
            "{} {}",
            words::cardinal(&(n / 100).to_string(), ""),
            phrases.hundred
        ),
        _ => words::pairwise(n),
    }
}
