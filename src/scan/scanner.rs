use std::ops::Range;

use tracing::{debug, trace};

use crate::engine::{Classifier, ConfigError, TokenizerConfig};
use crate::scan::CutMap;

/// Byte ranges produced by one scan over the input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Scan {
    pub tokens: Vec<Range<usize>>,
    /// Every separator code point, in input order.
    pub separators: Vec<Range<usize>>,
}

/// Splits text on separator code points.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    classifier: Classifier,
    keep_separators: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        let config = TokenizerConfig::default();
        Self {
            classifier: Classifier::new(&config),
            keep_separators: config.keep_separators,
        }
    }
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("Created tokenizer with mode {:?}", config.mode);

        Ok(Self {
            classifier: Classifier::new(&config),
            keep_separators: config.keep_separators,
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn keeps_separators(&self) -> bool {
        self.keep_separators
    }

    /// Tokenizes `content` into borrowed substrings.
    ///
    /// A separator at the very start yields a leading empty token. Runs of
    /// separators collapse into one boundary, and nothing is emitted after a
    /// trailing run. With `keep_separators`, each separator is its own token and
    /// the concatenation of all tokens equals `content`.
    ///
    /// With `keep_separators`, the empty fragment before a leading separator is
    /// not emitted: `".a"` gives `[".", "a"]`, not `["", ".", "a"]`.
    pub fn tokenize<'a>(&self, content: &'a str) -> Vec<&'a str> {
        // Every range starts and ends on a char boundary: cuts only sit at the
        // first byte of a code point and span its full length.
        self.scan(content.as_bytes())
            .tokens
            .into_iter()
            .map(|range| &content[range])
            .collect()
    }

    /// Byte-level variant of [`Tokenizer::tokenize`].
    ///
    /// Bytes that are not valid UTF-8 are each treated as a one-byte
    /// non-separator and end up inside the surrounding token.
    pub fn tokenize_bytes<'a>(&self, content: &'a [u8]) -> Vec<&'a [u8]> {
        self.scan(content)
            .tokens
            .into_iter()
            .map(|range| &content[range])
            .collect()
    }

    pub(crate) fn scan(&self, content: &[u8]) -> Scan {
        let cuts = CutMap::build(content, &self.classifier);
        let length = cuts.len();

        let mut scan = Scan::default();
        let mut last_cut = 0;
        let mut previous_is_separator = false;
        let mut skip = 0;

        for i in 0..length {
            // Continuation bytes of a separator already handled
            if skip > 0 {
                skip -= 1;
                continue;
            }

            let size = cuts.cut_at(i);
            if size == 0 {
                previous_is_separator = false;
                continue;
            }

            // Kept separators already mark a leading boundary, so the empty
            // fragment before them is dropped.
            if !previous_is_separator && (!self.keep_separators || i > last_cut) {
                scan.tokens.push(last_cut..i);
            }

            scan.separators.push(i..i + size);
            if self.keep_separators {
                scan.tokens.push(i..i + size);
            }

            last_cut = i + size;
            previous_is_separator = true;
            skip = size - 1;
        }

        if !previous_is_separator {
            scan.tokens.push(last_cut..length);
        }

        trace!(
            "Scanned {} bytes into {} tokens and {} separators",
            length,
            scan.tokens.len(),
            scan.separators.len()
        );

        scan
    }
}
