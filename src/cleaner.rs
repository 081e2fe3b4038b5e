use crate::{
    context::Context,
    locale::{DEFAULT_LOCALE, Locale, LocaleError, Spelling},
    process::DynamicProcess,
    profile::{Profile, ProfileError, preset},
    stage::{Stage, StageError},
};
use std::{borrow::Cow, fmt, str::FromStr, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("locale error: {0}")]
    Locale(#[from] LocaleError),
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("unknown cleaner mode `{0}`")]
    UnknownMode(String),
}

/// Which preset pipeline a [`Cleaner`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CleanerMode {
    /// Lowercase and collapse whitespace.
    #[default]
    Basic,
    /// Transliterate, lowercase, spell out numbers, blank out-of-vocabulary
    /// characters, expand abbreviations, collapse whitespace.
    Advanced,
}

impl CleanerMode {
    pub const fn name(self) -> &'static str {
        match self {
            CleanerMode::Basic => "basic",
            CleanerMode::Advanced => "advanced",
        }
    }

    pub fn profile(self) -> Profile<DynamicProcess> {
        match self {
            CleanerMode::Basic => preset::basic(),
            CleanerMode::Advanced => preset::advanced(),
        }
    }

    /// Word set the preset expects. Advanced transliterates before expanding,
    /// so it matches and emits folded words.
    pub const fn spelling(self) -> Spelling {
        match self {
            CleanerMode::Basic => Spelling::Authored,
            CleanerMode::Advanced => Spelling::Folded,
        }
    }
}

impl fmt::Display for CleanerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `basic` / `advanced` and the long forms `basic_cleaners` /
/// `advanced_cleaners`, ignoring ASCII case.
impl FromStr for CleanerMode {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix("_cleaners").unwrap_or(name);
        if name.eq_ignore_ascii_case("basic") {
            Ok(CleanerMode::Basic)
        } else if name.eq_ignore_ascii_case("advanced") {
            Ok(CleanerMode::Advanced)
        } else {
            Err(CleanError::UnknownMode(s.to_owned()))
        }
    }
}

/// A validated locale plus a stage list, reusable across calls and threads.
#[derive(Clone)]
pub struct Cleaner {
    ctx: Context,
    profile: Profile<DynamicProcess>,
}

impl Cleaner {
    pub fn new(locale: Locale, mode: CleanerMode) -> Result<Self, CleanError> {
        Self::builder().locale(locale).mode(mode).build()
    }

    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::default()
    }

    #[inline(always)]
    pub fn locale(&self) -> Locale {
        self.ctx.locale
    }

    #[inline(always)]
    pub fn spelling(&self) -> Spelling {
        self.ctx.spelling
    }

    #[inline(always)]
    pub fn profile_name(&self) -> &'static str {
        self.profile.name()
    }

    /// Clean one text. Input that no stage touches comes back borrowed.
    pub fn clean<'a>(&self, text: impl Into<Cow<'a, str>>) -> Result<Cow<'a, str>, CleanError> {
        Ok(self.profile.run(text.into(), &self.ctx)?)
    }
}

pub struct CleanerBuilder {
    locale: Locale,
    mode: CleanerMode,
    spelling: Option<Spelling>,
    stages: Vec<Arc<dyn Stage + Send + Sync>>,
}

impl Default for CleanerBuilder {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            mode: CleanerMode::default(),
            spelling: None,
            stages: Vec::new(),
        }
    }
}

impl CleanerBuilder {
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn mode(mut self, mode: CleanerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the word set. Defaults to the mode's spelling for presets and
    /// to [`Spelling::Authored`] for custom stage lists.
    pub fn spelling(mut self, spelling: Spelling) -> Self {
        self.spelling = Some(spelling);
        self
    }

    /// Replace the preset with a custom stage list. Stages run in the order
    /// they were added; once any stage is added the mode is ignored.
    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Result<Cleaner, CleanError> {
        let (profile, default_spelling) = if self.stages.is_empty() {
            (self.mode.profile(), self.mode.spelling())
        } else {
            let profile = self
                .stages
                .into_iter()
                .fold(Profile::plugin_builder("custom"), |b, s| b.add_shared_stage(s))
                .build();
            (profile, Spelling::Authored)
        };
        let ctx = Context::new(self.locale)?
            .with_spelling(self.spelling.unwrap_or(default_spelling));
        tracing::debug!(
            locale = ctx.locale.code,
            profile = profile.name(),
            spelling = ?ctx.spelling,
            "cleaner ready"
        );
        Ok(Cleaner { ctx, profile })
    }
}

/// Clean `text` with the preset pipeline for `mode` under `locale`.
pub fn clean(text: &str, locale: Locale, mode: CleanerMode) -> Result<String, CleanError> {
    let cleaner = Cleaner::new(locale, mode)?;
    Ok(cleaner.clean(text)?.into_owned())
}
