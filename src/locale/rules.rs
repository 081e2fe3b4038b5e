//! Compiled, process-wide rule sets.
//!
//! [`LocaleEntry`] holds authored data. Everything here is derived from it once,
//! on first use, and never mutated afterwards:
//!
//! * grouping / decimal regexes built from the locale's separators,
//! * two word sets, one as authored and one folded to lowercase ASCII, each
//!   with its abbreviation regexes (`(?i)\b<short>\.`) in table order,
//! * the symbol characters as a sorted slice for membership tests.

use crate::locale::{ALL_LOCALES, Locale, LocaleEntry, LocaleError, UnitWords};
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

static REGISTRY: LazyLock<HashMap<&'static str, LocaleRules>> = LazyLock::new(|| {
    ALL_LOCALES
        .iter()
        .filter_map(|&locale| {
            let entry = locale.entry().ok()?;
            Some((locale.code, LocaleRules::compile(locale, entry)))
        })
        .collect()
});

/// Compiled rules for `locale`, shared by every caller.
pub fn rules_for(locale: Locale) -> Result<&'static LocaleRules, LocaleError> {
    REGISTRY
        .get(locale.code)
        .ok_or_else(|| LocaleError::Unsupported(locale.code.to_owned()))
}

/// Transliterate to ASCII and lowercase: the form every table word takes in
/// the transliterating pipeline.
pub fn fold_ascii(s: &str) -> String {
    unidecode::unidecode(s).to_lowercase()
}

/// Which form of the table words is emitted and matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    /// Exactly as written in the locale table. For text that keeps its
    /// original characters.
    #[default]
    Authored,
    /// Transliterated and lowercased. For text that went through
    /// [`Transliterate`](crate::stage::transliterate::Transliterate).
    Folded,
}

impl Spelling {
    fn spell(self, s: &str) -> String {
        match self {
            Spelling::Authored => s.to_owned(),
            Spelling::Folded => fold_ascii(s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub one: String,
    pub many: String,
}

impl Unit {
    fn spell(words: UnitWords, spelling: Spelling) -> Self {
        Self {
            one: spelling.spell(words.one),
            many: spelling.spell(words.many),
        }
    }

    /// Singular iff the count is exactly one. `count` is a digit string
    /// without leading zeros.
    #[inline]
    pub fn for_count(&self, count: &str) -> &str {
        if count == "1" { &self.one } else { &self.many }
    }
}

/// Words the number expander emits.
#[derive(Debug, Clone)]
pub struct SpokenWords {
    pub pounds: String,
    pub euros: String,
    pub dollar: Unit,
    pub cent: Unit,
    pub zero_dollars: String,
    pub malformed_dollars: String,
    pub decimal: String,
    pub two_thousand: String,
    pub hundred: String,
}

#[derive(Debug, Clone)]
pub struct AbbreviationRule {
    pub pattern: Regex,
    pub expansion: String,
}

/// Spoken words and abbreviation rules in one [`Spelling`].
#[derive(Debug)]
pub struct WordSet {
    pub words: SpokenWords,
    pub abbreviations: Vec<AbbreviationRule>,
}

impl WordSet {
    fn compile(entry: &LocaleEntry, spelling: Spelling) -> Self {
        let abbreviations = entry
            .abbreviations
            .iter()
            .map(|a| AbbreviationRule {
                pattern: Regex::new(&format!(
                    r"(?i)\b{}\.",
                    regex::escape(&spelling.spell(a.short))
                ))
                .expect("escaped abbreviation forms a valid pattern"),
                expansion: spelling.spell(a.expansion),
            })
            .collect();

        let c = entry.currency;
        let words = SpokenWords {
            pounds: spelling.spell(c.pounds),
            euros: spelling.spell(c.euros),
            dollar: Unit::spell(c.dollar, spelling),
            cent: Unit::spell(c.cent, spelling),
            zero_dollars: spelling.spell(c.zero_dollars),
            malformed_dollars: spelling.spell(c.malformed_dollars),
            decimal: spelling.spell(entry.decimal_word),
            two_thousand: spelling.spell(entry.years.two_thousand),
            hundred: spelling.spell(entry.years.hundred),
        };

        Self {
            words,
            abbreviations,
        }
    }
}

#[derive(Debug)]
pub struct LocaleRules {
    locale: Locale,
    entry: LocaleEntry,
    grouped_number: Regex,
    decimal_number: Regex,
    authored: WordSet,
    folded: WordSet,
    vocabulary: Vec<char>,
}

impl LocaleRules {
    fn compile(locale: Locale, entry: &'static LocaleEntry) -> Self {
        let grouping = regex::escape(&entry.grouping_separator.to_string());
        let decimal = regex::escape(&entry.decimal_separator.to_string());

        let grouped_number = Regex::new(&format!("[0-9][0-9{grouping}]+[0-9]"))
            .expect("escaped separator forms a valid character class");
        let decimal_number = Regex::new(&format!("[0-9]+{decimal}[0-9]+"))
            .expect("escaped separator forms a valid pattern");

        let mut vocabulary: Vec<char> = entry.characters.chars().collect();
        vocabulary.sort_unstable();
        vocabulary.dedup();

        tracing::debug!(
            locale = locale.code,
            abbreviations = entry.abbreviations.len(),
            symbols = vocabulary.len(),
            "compiled locale rules"
        );

        Self {
            locale,
            entry: *entry,
            grouped_number,
            decimal_number,
            authored: WordSet::compile(entry, Spelling::Authored),
            folded: WordSet::compile(entry, Spelling::Folded),
            vocabulary,
        }
    }

    #[inline(always)]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[inline(always)]
    pub fn entry(&self) -> &LocaleEntry {
        &self.entry
    }

    #[inline(always)]
    pub fn grouping_separator(&self) -> char {
        self.entry.grouping_separator
    }

    #[inline(always)]
    pub fn decimal_separator(&self) -> char {
        self.entry.decimal_separator
    }

    /// Digit runs of three or more characters that may contain grouping
    /// separators.
    #[inline(always)]
    pub fn grouped_number(&self) -> &Regex {
        &self.grouped_number
    }

    #[inline(always)]
    pub fn decimal_number(&self) -> &Regex {
        &self.decimal_number
    }

    #[inline(always)]
    pub fn word_set(&self, spelling: Spelling) -> &WordSet {
        match spelling {
            Spelling::Authored => &self.authored,
            Spelling::Folded => &self.folded,
        }
    }

    #[inline(always)]
    pub fn abbreviations(&self, spelling: Spelling) -> &[AbbreviationRule] {
        &self.word_set(spelling).abbreviations
    }

    #[inline(always)]
    pub fn words(&self, spelling: Spelling) -> &SpokenWords {
        &self.word_set(spelling).words
    }

    /// Symbol characters of the locale, reserved markers excluded.
    #[inline(always)]
    pub fn characters(&self) -> &'static str {
        self.entry.characters
    }

    #[inline]
    pub fn in_vocabulary(&self, c: char) -> bool {
        self.vocabulary.binary_search(&c).is_ok()
    }
}
