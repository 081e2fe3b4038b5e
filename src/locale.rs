pub mod data;
pub mod rules;

use std::{fmt, str::FromStr};
use thiserror::Error;

pub use data::{ALL_LOCALES, DE_DE, EN_US, ES_ES, FR_FR, LOCALE_TABLE};
pub use rules::{LocaleRules, Spelling};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported locale `{0}`")]
    Unsupported(String),
}

/// A language/region pair selecting rule tables and a symbol set.
///
/// The supported set is closed: the constants exported from [`data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    pub code: &'static str,
    pub name: &'static str,
}

impl Locale {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a locale by code. Matching ignores ASCII case and accepts `-`
    /// in place of `_` (`en-us` finds `en_US`).
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        let wanted = code.trim().replace('-', "_");
        ALL_LOCALES
            .iter()
            .copied()
            .find(|l| l.code.eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| LocaleError::Unsupported(code.to_owned()))
    }

    /// Static table entry, or `Unsupported` for a hand-built `Locale`.
    pub fn entry(&self) -> Result<&'static LocaleEntry, LocaleError> {
        LOCALE_TABLE
            .get(self.code)
            .ok_or_else(|| LocaleError::Unsupported(self.code.to_owned()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

pub const DEFAULT_LOCALE: Locale = EN_US;

#[derive(Clone, Copy, Debug)]
pub struct Abbreviation {
    pub short: &'static str,
    pub expansion: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct UnitWords {
    pub one: &'static str,
    pub many: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CurrencyWords {
    pub pounds: &'static str,
    pub euros: &'static str,
    pub dollar: UnitWords,
    pub cent: UnitWords,
    pub zero_dollars: &'static str,
    /// Appended to an amount that could not be split into dollars and cents.
    pub malformed_dollars: &'static str,
}

/// Phrasing for the 1001..=2999 range, where numbers read like years.
#[derive(Clone, Copy, Debug)]
pub struct YearWords {
    pub two_thousand: &'static str,
    pub hundred: &'static str,
}

/// Raw, authored data for one locale. Words are stored in their native
/// spelling; [`LocaleRules`] folds them for the transliterating pipeline.
#[derive(Clone, Copy, Debug)]
pub struct LocaleEntry {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub decimal_word: &'static str,
    pub currency: CurrencyWords,
    pub years: YearWords,
    pub abbreviations: &'static [Abbreviation],
    pub characters: &'static str,
}
