// src/context.rs
// Single source of truth for locale configuration in hot paths.
// Tiny, Copy, and only points at 'static data.

use crate::locale::{
    Locale, LocaleError,
    rules::{AbbreviationRule, LocaleRules, Spelling, SpokenWords, rules_for},
};

/// Runtime context passed to every cleaning stage.
///
/// Contains:
/// - `locale`: human identifier (for logging, debugging)
/// - `rules`: the compiled tables every stage reads from
/// - `spelling`: which word set the expanding stages emit and match
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub locale: Locale,
    pub rules: &'static LocaleRules,
    pub spelling: Spelling,
}

impl Context {
    /// Resolve the compiled rules for a locale, authored spelling. This is the
    /// single place an unsupported locale is turned into an error.
    #[inline]
    pub fn new(locale: Locale) -> Result<Self, LocaleError> {
        let rules = rules_for(locale)?;
        Ok(Self {
            locale,
            rules,
            spelling: Spelling::Authored,
        })
    }

    #[inline]
    pub fn with_spelling(self, spelling: Spelling) -> Self {
        Self { spelling, ..self }
    }

    #[inline(always)]
    pub fn words(&self) -> &'static SpokenWords {
        self.rules.words(self.spelling)
    }

    #[inline(always)]
    pub fn abbreviations(&self) -> &'static [AbbreviationRule] {
        self.rules.abbreviations(self.spelling)
    }
}
