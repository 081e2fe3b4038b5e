use crate::locale::{Abbreviation, CurrencyWords, Locale, LocaleEntry, UnitWords, YearWords};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_locales {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        grouping: $grouping:literal,
        decimal: $decimal:literal => $decimal_word:literal,
        pounds: $pounds:literal,
        euros: $euros:literal,
        dollar: $dollar_one:literal / $dollar_many:literal,
        cent: $cent_one:literal / $cent_many:literal,
        zero_dollars: $zero:literal,
        malformed_dollars: $malformed:literal,
        two_thousand: $two_thousand:literal,
        hundred: $hundred:literal,
        abbreviations: [ $($short:literal => $long:literal),* $(,)? ],
        characters: $chars:literal
    ),* $(,)?) => {
        // Public `Locale` constants
        $(
            pub const $code: Locale = Locale { code: $code_str, name: $name };
        )*

        // Per-locale static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const ABBREVIATIONS: &[Abbreviation] = &[
                        $(Abbreviation { short: $short, expansion: $long }),*
                    ];

                    pub const CURRENCY: CurrencyWords = CurrencyWords {
                        pounds: $pounds,
                        euros: $euros,
                        dollar: UnitWords { one: $dollar_one, many: $dollar_many },
                        cent: UnitWords { one: $cent_one, many: $cent_many },
                        zero_dollars: $zero,
                        malformed_dollars: $malformed,
                    };

                    pub const YEARS: YearWords = YearWords {
                        two_thousand: $two_thousand,
                        hundred: $hundred,
                    };
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LOCALE_TABLE: Map<&'static str, LocaleEntry> = phf_map! {
                $(
                    $code_str => LocaleEntry {
                        grouping_separator: $grouping,
                        decimal_separator: $decimal,
                        decimal_word: $decimal_word,
                        currency: [<$code:lower _data>]::CURRENCY,
                        years: [<$code:lower _data>]::YEARS,
                        abbreviations: [<$code:lower _data>]::ABBREVIATIONS,
                        characters: $chars,
                    }
                ),*
            };
        }

        /// Every supported locale, in declaration order.
        pub static ALL_LOCALES: &[Locale] = &[$($code),*];
    };
}

// ---------------------------------------------------------------------------
//    Locale definitions (single source of truth)
//    Abbreviation order matters: each rule runs once, top to bottom.
// ---------------------------------------------------------------------------
define_locales! {
    EN_US, "en_US", "English (United States)",
        grouping: ',',
        decimal: '.' => "point",
        pounds: "pounds",
        euros: "euros",
        dollar: "dollar" / "dollars",
        cent: "cent" / "cents",
        zero_dollars: "zero dollars",
        malformed_dollars: "dollars",
        two_thousand: "two thousand",
        hundred: "hundred",
        abbreviations: [
            "mrs" => "misess",
            "ms" => "miss",
            "mr" => "mister",
            "dr" => "doctor",
            "st" => "saint",
            "co" => "company",
            "jr" => "junior",
            "maj" => "major",
            "gen" => "general",
            "drs" => "doctors",
            "rev" => "reverend",
            "lt" => "lieutenant",
            "hon" => "honorable",
            "sgt" => "sergeant",
            "capt" => "captain",
            "esq" => "esquire",
            "ltd" => "limited",
            "col" => "colonel",
            "ft" => "fort",
        ],
        characters: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!'\"(),-.:;? ",

    ES_ES, "es_ES", "Spanish (Spain)",
        grouping: '.',
        decimal: ',' => "comma",
        pounds: "libras esterlinas",
        euros: "euros",
        dollar: "dólar" / "dolares",
        cent: "centavo" / "centavos",
        zero_dollars: "cero dolares",
        malformed_dollars: "dolares",
        two_thousand: "dos mil",
        hundred: "centenar",
        abbreviations: [
            "sra" => "señora",
            "srta" => "señorita",
            "sr" => "señor",
            "d" => "don",
            "da" => "doña",
            "dr" => "doctor",
            "dra" => "doctora",
            "gob" => "gobierno",
            "ing" => "ingeniero",
            "gral" => "general",
            "tel" => "teléfono",
        ],
        characters: "AÁBCDEÉFGHIÍJKLMNÑOÓPQRSTUÚÜVWXYZaábcdeéfghiíjklmnñoópqrstuúüvwxyz!'\"(),-.:;?¿«» ",

    DE_DE, "de_DE", "German (Germany)",
        grouping: '.',
        decimal: ',' => "comma",
        pounds: "Pfund",
        euros: "Euro",
        dollar: "Dollar" / "Dollar",
        cent: "Cent" / "Cent",
        zero_dollars: "null Dollar",
        malformed_dollars: "Dollar",
        two_thousand: "zwei tausend",
        hundred: "hundert",
        abbreviations: [
            "fr" => "frau",
            "hr" => "herr",
            "fam" => "familie",
            "str" => "straße",
            "usw" => "und so weiter",
            "bzw" => "beziehungsweise",
            "urspr" => "ursprünglich",
            "zz" => "zurzeit",
            "ing" => "ingenieur",
            "ugs" => "umgangssprachlich",
            "jmdn" => "jemanden",
            "jmd" => "jemand",
            "jmds" => "jemandes",
            "geb" => "geboren",
            "eigtl" => "eigentlich",
            "bes" => "besonders",
            "allg" => "allgemein",
        ],
        characters: "AÄBCDEFGHIJKLMNOÖPQRSßTUÜVWXYZaäbcdefghijklmnoöpqrstuüvwxyz!'„\"‚‘(),-.:;? ",

    FR_FR, "fr_FR", "French (France)",
        grouping: '.',
        decimal: ',' => "comma",
        pounds: "livre sterling",
        euros: "euros",
        dollar: "dollar" / "dollars",
        cent: "cent" / "centimes",
        zero_dollars: "zero dollars",
        malformed_dollars: "Dollar",
        two_thousand: "deux milles",
        hundred: "cent",
        abbreviations: [
            "mon" => "monsieur",
            "mme" => "madame",
            "fam" => "famille",
            "ex" => "exemple",
            "bjr" => "bonjour",
            "adm" => "administration",
            "auj" => "aujourd'hui",
            "bât" => "bâtiment",
            "bsr" => "bonsoir",
            "dr" => "docteur",
            "expr" => "expression",
            "hist" => "histoire",
        ],
        characters: "AÀÂBCÇDEÈÊËFGHIÎÏJKLMNOÔPQRSTUÙÛVWXYZaàâbcçdeèêëfghiîïjklmnoôpqrstuùûvwxyz!'\"(),-.:;?«» ",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_locale() {
        assert_eq!(ALL_LOCALES.len(), LOCALE_TABLE.len());
        for l in ALL_LOCALES {
            assert!(LOCALE_TABLE.get(l.code).is_some(), "{l} missing from table");
        }
    }

    #[test]
    fn separators_differ_per_locale() {
        let en = LOCALE_TABLE.get("en_US").unwrap();
        assert_eq!((en.grouping_separator, en.decimal_separator), (',', '.'));
        for code in ["es_ES", "de_DE", "fr_FR"] {
            let e = LOCALE_TABLE.get(code).unwrap();
            assert_eq!((e.grouping_separator, e.decimal_separator), ('.', ','));
            assert_eq!(e.decimal_word, "comma");
        }
    }

    #[test]
    fn abbreviation_keys_are_unique_per_locale() {
        for l in ALL_LOCALES {
            let entry = l.entry().unwrap();
            let mut keys: Vec<&str> = entry.abbreviations.iter().map(|a| a.short).collect();
            keys.sort_unstable();
            let before = keys.len();
            keys.dedup();
            assert_eq!(before, keys.len(), "duplicate abbreviation in {l}");
        }
    }

    #[test]
    fn characters_exclude_digits() {
        for l in ALL_LOCALES {
            let entry = l.entry().unwrap();
            assert!(!entry.characters.chars().any(|c| c.is_ascii_digit()));
        }
    }
}
