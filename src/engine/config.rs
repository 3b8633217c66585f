// Configuration for the tokenizer
// Defaults mirror the separator sets the tokenizer has always shipped with

use std::collections::BTreeSet;

use lazy_static::lazy_static;

use crate::engine::error::ConfigError;

/// Separators used by the first-generation, explicit-set tokenizer.
pub const LEGACY_SEPARATORS: &str = "\t\n\r ,.:?\"!;()";

lazy_static! {
    static ref LEGACY_SET: BTreeSet<char> = LEGACY_SEPARATORS.chars().collect();
    /// Apostrophe stays inside words so contractions like "aren't" survive.
    static ref DEFAULT_IGNORE: BTreeSet<char> = ['\''].into_iter().collect();
}

/// Broad character classes a code point can be tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Unicode general category P*
    Punctuation,
    /// Unicode general category S*
    Symbol,
    /// Unicode general category Z*
    Space,
    /// Unicode general category Cc
    Control,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Punctuation,
        CharClass::Symbol,
        CharClass::Space,
        CharClass::Control,
    ];
}

/// How separators are recognised before the ignore set is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeparatorMode {
    Explicit(BTreeSet<char>),
    Classes(Vec<CharClass>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Separator matching strategy (default: every class in `CharClass::ALL`)
    pub mode: SeparatorMode,

    /// Code points that are never separators (default: apostrophe)
    pub ignore: BTreeSet<char>,

    /// Emit each separator as its own token (default false)
    pub keep_separators: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            mode: SeparatorMode::Classes(CharClass::ALL.to_vec()),
            ignore: DEFAULT_IGNORE.clone(),
            keep_separators: false,
        }
    }
}

impl TokenizerConfig {
    /// Explicit-set configuration matching the original byte-table tokenizer.
    pub fn legacy() -> Self {
        Self {
            mode: SeparatorMode::Explicit(LEGACY_SET.clone()),
            ignore: BTreeSet::new(),
            keep_separators: false,
        }
    }

    /// Switches to explicit mode using every code point of `separators`.
    pub fn with_separators(mut self, separators: &str) -> Self {
        self.mode = SeparatorMode::Explicit(separators.chars().collect());
        self
    }

    pub fn with_classes(mut self, classes: &[CharClass]) -> Self {
        self.mode = SeparatorMode::Classes(classes.to_vec());
        self
    }

    /// Adds every code point of `chars` to the ignore set.
    pub fn ignoring(mut self, chars: &str) -> Self {
        self.ignore.extend(chars.chars());
        self
    }

    pub fn keep_separators(mut self, keep: bool) -> Self {
        self.keep_separators = keep;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.mode {
            SeparatorMode::Explicit(set) if set.is_empty() => Err(ConfigError::EmptySeparatorSet),
            SeparatorMode::Classes(classes) if classes.is_empty() => {
                Err(ConfigError::EmptyClassList)
            }
            _ => Ok(()),
        }
    }
}
