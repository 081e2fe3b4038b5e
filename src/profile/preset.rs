use crate::{
    process::DynamicProcess,
    profile::Profile,
    stage::{
        collapse_whitespace::CollapseWhitespace, expand_abbreviations::ExpandAbbreviations,
        expand_numbers::ExpandNumbers, lower_case::LowerCase,
        retain_vocabulary::RetainVocabulary, transliterate::Transliterate,
    },
};

/// Lowercase and collapse whitespace. Everything else passes through,
/// including numbers and non-ASCII letters.
pub fn basic() -> Profile<DynamicProcess> {
    Profile::plugin_builder("basic")
        .add_stage(LowerCase)
        .add_stage(CollapseWhitespace)
        .build()
}

/// Full cleaning for synthesis: ASCII, lowercase, numbers and abbreviations
/// spelled out, nothing outside the locale's symbol set.
///
/// Numbers expand before the vocabulary filter (which would drop `$`, `£`,
/// `€`), abbreviations after it.
pub fn advanced() -> Profile<DynamicProcess> {
    Profile::plugin_builder("advanced")
        .add_stage(Transliterate)
        .add_stage(LowerCase)
        .add_stage(ExpandNumbers)
        .add_stage(RetainVocabulary)
        .add_stage(ExpandAbbreviations)
        .add_stage(CollapseWhitespace)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_stage_order() {
        assert_eq!(
            basic().stage_names().collect::<Vec<_>>(),
            ["lower_case", "collapse_whitespace"]
        );
        assert_eq!(
            advanced().stage_names().collect::<Vec<_>>(),
            [
                "transliterate",
                "lower_case",
                "expand_numbers",
                "retain_vocabulary",
                "expand_abbreviations",
                "collapse_whitespace",
            ]
        );
    }

    #[test]
    fn preset_names() {
        assert_eq!(basic().name(), "basic");
        assert_eq!(advanced().name(), "advanced");
    }
}
