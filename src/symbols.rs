//! Symbol vocabularies and id mapping.
//!
//! A locale's vocabulary is `[PAD, EOS]` followed by its characters; a
//! symbol's id is its index in that list.

use crate::locale::{Locale, LocaleError};
use std::collections::HashMap;

/// Padding marker, always id 0.
pub const PAD: char = '_';
/// End-of-sequence marker, always id 1.
pub const EOS: char = '~';

/// `[PAD, EOS] + locale characters`, without duplicates.
pub fn symbols(locale: Locale) -> Result<Vec<char>, LocaleError> {
    let entry = locale.entry()?;
    let mut out = vec![PAD, EOS];
    for c in entry.characters.chars() {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    Ok(out)
}

/// Bidirectional char / id mapping over one locale's vocabulary.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    locale: Locale,
    symbols: Vec<char>,
    ids: HashMap<char, usize>,
}

impl SymbolTable {
    pub fn new(locale: Locale) -> Result<Self, LocaleError> {
        let symbols = symbols(locale)?;
        let ids = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Ok(Self {
            locale,
            symbols,
            ids,
        })
    }

    #[inline(always)]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[inline]
    pub fn id(&self, c: char) -> Option<usize> {
        self.ids.get(&c).copied()
    }

    #[inline]
    pub fn symbol(&self, id: usize) -> Option<char> {
        self.symbols.get(id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline(always)]
    pub const fn pad_id(&self) -> usize {
        0
    }

    #[inline(always)]
    pub const fn eos_id(&self) -> usize {
        1
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Ids of the known characters of `text`, followed by the EOS id.
    /// Unknown characters and literal markers are skipped.
    pub fn encode(&self, text: &str) -> Vec<usize> {
        let mut out: Vec<usize> = text
            .chars()
            .filter_map(|c| self.id(c))
            .filter(|&id| !self.is_reserved(id))
            .collect();
        out.push(self.eos_id());
        out
    }

    /// Inverse of [`encode`](Self::encode). Markers and unknown ids are
    /// skipped.
    pub fn decode(&self, ids: &[usize]) -> String {
        ids.iter()
            .filter(|&&id| !self.is_reserved(id))
            .filter_map(|&id| self.symbol(id))
            .collect()
    }

    #[inline(always)]
    fn is_reserved(&self, id: usize) -> bool {
        id == self.pad_id() || id == self.eos_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ALL_LOCALES, DE_DE, EN_US, ES_ES, FR_FR};

    #[test]
    fn vocabulary_starts_with_markers_and_has_no_duplicates() {
        for &l in ALL_LOCALES {
            let s = symbols(l).unwrap();
            assert_eq!(&s[..2], &[PAD, EOS]);
            let mut sorted = s.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), s.len(), "duplicates in {l}");
        }
    }

    #[test]
    fn locale_specific_characters() {
        assert!(symbols(ES_ES).unwrap().contains(&'ñ'));
        assert!(symbols(DE_DE).unwrap().contains(&'ß'));
        assert!(symbols(FR_FR).unwrap().contains(&'ç'));
        assert!(!symbols(EN_US).unwrap().contains(&'é'));
        assert!(!symbols(EN_US).unwrap().iter().any(char::is_ascii_digit));
    }

    #[test]
    fn english_vocabulary_size() {
        // 2 markers, 52 letters, 11 punctuation marks, space
        assert_eq!(symbols(EN_US).unwrap().len(), 66);
    }

    #[test]
    fn unsupported_locale() {
        let bogus = Locale {
            code: "pl_PL",
            name: "Polish",
        };
        assert_eq!(
            symbols(bogus).unwrap_err(),
            LocaleError::Unsupported("pl_PL".into())
        );
        assert!(SymbolTable::new(bogus).is_err());
    }

    #[test]
    fn encode_skips_unknown_and_appends_eos() {
        let table = SymbolTable::new(EN_US).unwrap();
        let ids = table.encode("hi~ 5!");
        assert_eq!(ids.last(), Some(&table.eos_id()));
        assert_eq!(table.decode(&ids), "hi !");
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn lookup_both_ways() {
        let table = SymbolTable::new(FR_FR).unwrap();
        assert_eq!(table.id(PAD), Some(0));
        assert_eq!(table.id(EOS), Some(1));
        let id = table.id('ç').unwrap();
        assert_eq!(table.symbol(id), Some('ç'));
        assert_eq!(table.symbol(table.len()), None);
        assert_eq!(table.decode(&[0, 1, 9999]), "");
    }
}
