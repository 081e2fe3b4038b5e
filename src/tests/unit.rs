#[cfg(test)]
mod unit_tests {

    use crate::{
        CleanError, Cleaner, CleanerMode, DE_DE, EN_US, ES_ES, FR_FR, Locale, LocaleError, clean,
        collapse_whitespace, expand_abbreviations, normalize_numbers, symbols,
    };
    use std::borrow::Cow;

    #[test]
    fn basic_lowercases_and_collapses() {
        let out = clean("  Hello,   World!\n", EN_US, CleanerMode::Basic).unwrap();
        assert_eq!(out, " hello, world! ");
    }

    #[test]
    fn basic_keeps_numbers_and_accents() {
        let out = clean("Ça Coûte 5€", FR_FR, CleanerMode::Basic).unwrap();
        assert_eq!(out, "ça coûte 5€");
    }

    #[test]
    fn zero_copy_when_already_clean() {
        let cleaner = Cleaner::new(EN_US, CleanerMode::Basic).unwrap();
        let input = "already clean";
        let result = cleaner.clean(input).unwrap();
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn owned_input_is_accepted() {
        let cleaner = Cleaner::new(DE_DE, CleanerMode::Basic).unwrap();
        let out = cleaner.clean(String::from("GROSS  und KLEIN")).unwrap();
        assert_eq!(out, "gross und klein");
    }

    #[test]
    fn collapse_examples() {
        assert_eq!(collapse_whitespace("a   b\tc"), "a b c");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n "), " ");
    }

    #[test]
    fn number_examples() {
        assert_eq!(
            normalize_numbers("$1.50", EN_US).unwrap(),
            "one dollar, fifty cents"
        );
        assert_eq!(normalize_numbers("2005", EN_US).unwrap(), "two thousand five");
        assert_eq!(normalize_numbers("1900", EN_US).unwrap(), "nineteen hundred");
        assert_eq!(normalize_numbers("1000", EN_US).unwrap(), "one thousand");
        assert_eq!(normalize_numbers("3000", EN_US).unwrap(), "three thousand");
        assert_eq!(normalize_numbers("2010", EN_US).unwrap(), "twenty ten");
    }

    #[test]
    fn abbreviation_example() {
        assert_eq!(
            expand_abbreviations("Dr. Smith", EN_US).unwrap(),
            "doctor Smith"
        );
    }

    #[test]
    fn symbol_lists_start_with_markers() {
        for locale in [EN_US, ES_ES, DE_DE, FR_FR] {
            let s = symbols(locale).unwrap();
            assert_eq!(s[0], '_');
            assert_eq!(s[1], '~');
        }
    }

    #[test]
    fn every_entry_point_rejects_unknown_locales() {
        let bogus = Locale {
            code: "xx_XX",
            name: "Nowhere",
        };
        let expected = LocaleError::Unsupported("xx_XX".into());
        assert_eq!(symbols(bogus).unwrap_err(), expected);
        assert_eq!(normalize_numbers("1", bogus).unwrap_err(), expected);
        assert_eq!(expand_abbreviations("Dr.", bogus).unwrap_err(), expected);
        assert!(matches!(
            clean("x", bogus, CleanerMode::Basic),
            Err(CleanError::Locale(LocaleError::Unsupported(_)))
        ));
        assert!(Cleaner::new(bogus, CleanerMode::Advanced).is_err());
    }

    #[test]
    fn locale_codes_parse() {
        let locale: Locale = "de-DE".parse().unwrap();
        assert_eq!(locale, DE_DE);
        assert!("xx".parse::<Locale>().is_err());
    }

    #[test]
    fn error_messages_are_readable() {
        let err = clean("x", Locale { code: "nl_NL", name: "Dutch" }, CleanerMode::Basic)
            .unwrap_err();
        assert_eq!(err.to_string(), "locale error: unsupported locale `nl_NL`");
        let err = "loud".parse::<CleanerMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown cleaner mode `loud`");
    }
}
