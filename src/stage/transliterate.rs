//! stage/transliterate.rs – **Lossy ASCII transliteration**
//! * `é` → `e`, `ß` → `ss`, `Æ` → `AE`, `北京` → `Bei Jing `
//! * Case is kept; lowercasing is a separate stage
//! * `£` and `€` pass through so the number expander still sees them
//! * Zero-copy when the text is already ASCII
use crate::{
    context::Context,
    number::CURRENCY_SIGNS,
    stage::{Stage, StageError},
};
use std::borrow::Cow;
use unidecode::unidecode_char;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterate;

#[inline(always)]
fn transliterates(c: char) -> bool {
    !c.is_ascii() && !CURRENCY_SIGNS.contains(&c)
}

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(false);
        }
        Ok(text.chars().any(transliterates))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if transliterates(c) {
                out.push_str(unidecode_char(c));
            } else {
                out.push(c);
            }
        }
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{Locale, assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for Transliterate {
        fn samples(_locale: Locale) -> &'static [&'static str] {
            &[
                "Hello World 123",
                " déjà-vu ",
                "TEST",
                "",
                "Straße Ñandú Œuvre",
                "£5 and €10",
                "¿Qué?",
            ]
        }

        fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
            &["hello", "Mixed Case 42", "costs £5 or €6", ""]
        }

        fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
            &[
                ("déjà vu", "deja vu"),
                ("Straße", "Strasse"),
                ("Ñandú", "Nandu"),
                ("Mädchen für £5", "Madchen fur £5"),
                ("bâtiment", "batiment"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Transliterate);
    }

    #[test]
    fn output_is_ascii_apart_from_currency_signs() {
        let ctx = Context::new(crate::FR_FR).unwrap();
        let out = Transliterate
            .apply(Cow::Borrowed("Ça coûte €3 à Noël, ça"), &ctx)
            .unwrap();
        assert!(out.chars().all(|c| c.is_ascii() || c == '€'));
        assert_eq!(out, "Ca coute €3 a Noel, ca");
    }
}
