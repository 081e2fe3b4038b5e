pub mod cleaner;
pub mod context;
pub mod locale;
pub mod number;
pub mod process;
pub mod profile;
pub mod stage;
pub mod symbols;

pub use cleaner::{CleanError, Cleaner, CleanerBuilder, CleanerMode, clean};
pub use context::Context;
pub use locale::{
    ALL_LOCALES, DE_DE, DEFAULT_LOCALE, EN_US, ES_ES, FR_FR, Locale, LocaleError, Spelling,
};
pub use number::normalize_numbers;
pub use profile::{Profile, ProfileError};
pub use stage::collapse_whitespace::{CollapseWhitespace, collapse_whitespace};
pub use stage::expand_abbreviations::{ExpandAbbreviations, expand_abbreviations};
pub use stage::expand_numbers::ExpandNumbers;
pub use stage::lower_case::LowerCase;
pub use stage::retain_vocabulary::RetainVocabulary;
pub use stage::transliterate::Transliterate;
pub use stage::{Stage, StageError};
pub use symbols::{EOS, PAD, SymbolTable, symbols};

#[cfg(test)]
mod testing {
    pub mod stage_contract;
}
