use crate::engine::{ConfigError, RestoreError, TokenizerConfig};
use crate::restore::trace::{restore, SeparatorTrace};
use crate::scan::Tokenizer;

/// Tokenizer that remembers the separators of its most recent call.
///
/// Each `tokenize` overwrites the stored trace, so `restore` always refers to
/// the latest input. Use [`Tokenizer::tokenize_with_trace`] when several
/// inputs need to be restored independently.
#[derive(Debug, Clone, Default)]
pub struct RestoringTokenizer {
    tokenizer: Tokenizer,
    trace: SeparatorTrace,
}

impl RestoringTokenizer {
    pub fn new(config: TokenizerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            tokenizer: Tokenizer::new(config)?,
            trace: SeparatorTrace::default(),
        })
    }

    pub fn tokenize<'a>(&mut self, content: &'a str) -> Vec<&'a str> {
        let tokenized = self.tokenizer.tokenize_with_trace(content);
        self.trace = tokenized.trace;
        tokenized.tokens
    }

    pub fn restore<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String, RestoreError> {
        restore(tokens, &self.trace)
    }

    pub fn trace(&self) -> &SeparatorTrace {
        &self.trace
    }
}
