use crate::{context::Context, number::words::canonical_digits};

/// Rewrite the amount of a `$` match (the sign already stripped) as digit
/// counts followed by unit words. Digits stay digits; the cardinal step spells
/// them later.
///
/// The amount is split on the locale's decimal separator. More than two parts
/// is malformed: the raw amount is kept and the plural unit appended.
pub fn expand_dollars(amount: &str, ctx: &Context) -> String {
    let words = ctx.words();
    let parts: Vec<&str> = amount.split(ctx.rules.decimal_separator()).collect();

    let (whole, fraction) = match parts.as_slice() {
        [whole] => (*whole, ""),
        [whole, fraction] => (*whole, *fraction),
        _ => {
            tracing::debug!(
                amount,
                locale = ctx.locale.code,
                "malformed dollar amount left unsplit"
            );
            return format!("{amount} {}", words.malformed_dollars);
        }
    };

    let dollars = canonical_digits(whole);
    let cents = canonical_digits(fraction);
    let dollar = words.dollar.for_count(&dollars);
    let cent = words.cent.for_count(&cents);

    match (dollars != "0", cents != "0") {
        (true, true) => format!("{dollars} {dollar}, {cents} {cent}"),
        (true, false) => format!("{dollars} {dollar}"),
        (false, true) => format!("{cents} {cent}"),
        (false, false) => words.zero_dollars.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DE_DE, EN_US, ES_ES, FR_FR};

    fn dollars(amount: &str, locale: crate::Locale) -> String {
        expand_dollars(amount, &Context::new(locale).unwrap())
    }

    #[test]
    fn dollars_and_cents() {
        assert_eq!(dollars("1.50", EN_US), "1 dollar, 50 cents");
        assert_eq!(dollars("2.01", EN_US), "2 dollars, 1 cent");
        assert_eq!(dollars("1,50", ES_ES), "1 dólar, 50 centavos");
    }

    #[test]
    fn one_side_only() {
        assert_eq!(dollars("5", EN_US), "5 dollars");
        assert_eq!(dollars("1", EN_US), "1 dollar");
        assert_eq!(dollars("0.01", EN_US), "1 cent");
        assert_eq!(dollars("0,02", FR_FR), "2 centimes");
        assert_eq!(dollars("3,00", DE_DE), "3 Dollar");
    }

    #[test]
    fn zero_amount() {
        assert_eq!(dollars("0", EN_US), "zero dollars");
        assert_eq!(dollars("0.00", EN_US), "zero dollars");
        assert_eq!(dollars("0", ES_ES), "cero dolares");
        assert_eq!(dollars("0", DE_DE), "null Dollar");
    }

    #[test]
    fn leading_zeros_do_not_leak() {
        assert_eq!(dollars("007.05", EN_US), "7 dollars, 5 cents");
    }

    #[test]
    fn too_many_parts_keeps_raw_amount() {
        assert_eq!(dollars("1.2.3", EN_US), "1.2.3 dollars");
        assert_eq!(dollars("1,2,3", FR_FR), "1,2,3 Dollar");
    }

    #[test]
    fn folded_context_emits_folded_units() {
        let ctx = Context::new(ES_ES)
            .unwrap()
            .with_spelling(crate::Spelling::Folded);
        assert_eq!(expand_dollars("1,50", &ctx), "1 dolar, 50 centavos");
        let ctx = Context::new(DE_DE)
            .unwrap()
            .with_spelling(crate::Spelling::Folded);
        assert_eq!(expand_dollars("0", &ctx), "null dollar");
    }

    #[test]
    fn stray_grouping_marks_are_ignored() {
        assert_eq!(dollars("1,000.5", EN_US), "1000 dollars, 5 cents");
    }
}
