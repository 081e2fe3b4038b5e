use crate::{ALL_LOCALES, EN_US, Locale, context::Context, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples(_locale: Locale) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    ///
    /// Default: lowercase ASCII every stage leaves alone in every locale.
    fn should_pass_through(_locale: Locale) -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform(_locale: Locale) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string` → empty in, empty out
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
///
/// Every contract runs in every supported locale.
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

fn context(locale: Locale) -> Context {
    Context::new(locale).expect("every exported locale has rules")
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &locale in ALL_LOCALES {
        let ctx = context(locale);

        for &input in S::samples(locale) {
            let mut text = Cow::Borrowed(input);

            // First pass – respect needs_apply
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
                assert!(
                    matches!(text, Cow::Owned(_)),
                    "stage `{}` claimed a change but returned borrowed text ({locale}, `{input}`)",
                    stage.name()
                );
            } else {
                // No change needed → must remain borrowed with identical pointer
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass – must never allocate again
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass ({locale}, input: `{input}`)"
            );
        }

        // Pass-through samples must always be zero-copy and unchanged
        for &pass_through in S::should_pass_through(locale) {
            let text = stage.apply(Cow::Borrowed(pass_through), &ctx).unwrap();
            assert_eq!(text.as_ref(), pass_through);
            assert!(
                matches!(text, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
                "zero-copy violated on pass-through sample ({locale}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(locale) {
            let mut text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }
            assert_eq!(text.as_ref(), expected, "{locale}: `{input}`");
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &locale in ALL_LOCALES {
        let ctx = context(locale);
        for &input in S::samples(locale) {
            let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            let twice = stage.apply(once.clone(), &ctx).unwrap();
            assert_eq!(once, twice, "apply() not idempotent in {locale} on `{input}`");
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &locale in ALL_LOCALES {
        let ctx = context(locale);
        for &sample in S::samples(locale) {
            check_accuracy(&stage, sample, &ctx);
        }
        for &(sample, _) in S::should_transform(locale) {
            check_accuracy(&stage, sample, &ctx);
        }
        // Explicit “must not trigger” set
        for clean in ["", "hello", "abc def"] {
            check_accuracy(&stage, clean, &ctx);
        }
    }
}

#[inline(always)]
fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {locale} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        locale = ctx.locale
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    for &locale in ALL_LOCALES {
        let ctx = context(locale);
        assert!(!stage.needs_apply("", &ctx).unwrap());
        let out = stage.apply(Cow::Borrowed(""), &ctx).unwrap();
        assert_eq!(out.as_ref(), "");
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let ctx = context(EN_US);
    let _ = stage.apply(
        Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文 $1.2.3 £ €9,99 No. 5th"),
        &ctx,
    );
}
