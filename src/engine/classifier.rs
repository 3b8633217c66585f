use std::collections::BTreeSet;

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::engine::config::{CharClass, SeparatorMode, TokenizerConfig};

/// Decides whether a single code point delimits tokens.
#[derive(Debug, Clone)]
pub struct Classifier {
    mode: SeparatorMode,
    ignore: BTreeSet<char>,
}

impl Classifier {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            mode: config.mode.clone(),
            ignore: config.ignore.clone(),
        }
    }

    /// The ignore set wins over both matching modes.
    pub fn is_separator(&self, c: char) -> bool {
        if self.ignore.contains(&c) {
            return false;
        }

        match &self.mode {
            SeparatorMode::Explicit(set) => set.contains(&c),
            SeparatorMode::Classes(classes) => classes.iter().any(|&class| in_class(class, c)),
        }
    }
}

fn in_class(class: CharClass, c: char) -> bool {
    match class {
        CharClass::Punctuation => is_punctuation(c),
        CharClass::Symbol => is_symbol(c),
        CharClass::Space => is_space(c),
        CharClass::Control => get_general_category(c) == GeneralCategory::Control,
    }
}

fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

fn is_space(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let classifier = Classifier::new(&TokenizerConfig::default());
        for c in [' ', '\t', '\n', ':', '.', '’', '、', '。', '+', '$', '\u{7}'] {
            assert!(classifier.is_separator(c), "{:?} should be a separator", c);
        }
        for c in ['a', 'Z', '7', 'デ', 'é'] {
            assert!(!classifier.is_separator(c), "{:?} should not be a separator", c);
        }
    }

    #[test]
    fn test_apostrophe_ignored_by_default() {
        let classifier = Classifier::new(&TokenizerConfig::default());
        assert!(!classifier.is_separator('\''));
    }

    #[test]
    fn test_space_class_only() {
        let config = TokenizerConfig::default().with_classes(&[CharClass::Space]);
        let classifier = Classifier::new(&config);
        assert!(classifier.is_separator(' '));
        assert!(classifier.is_separator('\u{3000}')); // ideographic space
        assert!(classifier.is_separator('\u{2028}'));
        assert!(!classifier.is_separator(':'));
    }

    #[test]
    fn test_space_class_excludes_control_whitespace() {
        let config = TokenizerConfig::default().with_classes(&[CharClass::Space]);
        let classifier = Classifier::new(&config);
        for c in ['\t', '\n', '\r'] {
            assert!(!classifier.is_separator(c), "{:?} is Cc, not Z", c);
        }

        let both =
            TokenizerConfig::default().with_classes(&[CharClass::Space, CharClass::Control]);
        assert!(Classifier::new(&both).is_separator('\t'));
    }

    #[test]
    fn test_explicit_set() {
        let config = TokenizerConfig::default().with_separators("。、");
        let classifier = Classifier::new(&config);
        assert!(classifier.is_separator('。'));
        assert!(classifier.is_separator('、'));
        assert!(!classifier.is_separator(' '));
    }

    #[test]
    fn test_ignore_overrides_explicit_set() {
        let config = TokenizerConfig::legacy().ignoring(":");
        let classifier = Classifier::new(&config);
        assert!(!classifier.is_separator(':'));
        assert!(classifier.is_separator(' '));
    }

    #[test]
    fn test_ignore_equivalent_to_never_matching() {
        // Excluding a code point behaves the same no matter how broad the classes are
        let narrow = Classifier::new(
            &TokenizerConfig::default()
                .with_classes(&[CharClass::Space])
                .ignoring("-"),
        );
        let broad = Classifier::new(&TokenizerConfig::default().ignoring("-"));
        assert!(!narrow.is_separator('-'));
        assert!(!broad.is_separator('-'));
    }
}
